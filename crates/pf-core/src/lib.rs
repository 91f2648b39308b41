//! pf-core: shared foundation for procflow.
//!
//! Contains:
//! - ids (compact stream handles)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom mass-rate view of stream values)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{PfError, PfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
