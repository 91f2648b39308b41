// pf-core/src/units.rs

use uom::si::f64::MassRate as UomMassRate;
use uom::si::mass_rate::kilogram_per_second;

use crate::Real;

/// Stream values are stored as plain kg/s; this is the typed view.
pub type MassRate = UomMassRate;

#[inline]
pub fn kgps(v: Real) -> MassRate {
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kgps_value(m: MassRate) -> Real {
    m.get::<kilogram_per_second>()
}
