//! Device contract shared by all processing units.

use pf_core::{Real, StreamId};

use crate::error::NetworkResult;
use crate::mixer::Mixer;
use crate::reactor::Reactor;
use crate::slots::Slots;
use crate::stream::StreamTable;

/// A processing unit with bounded input/output slots and a recompute rule.
///
/// Wiring goes through the provided `add_input`/`add_output`, which share the
/// bounded-append logic of [`Slots`]. Implementors supply the slots and
/// `update_outputs`. Devices never update on their own; the caller decides
/// when the wiring is complete.
pub trait FlowDevice {
    /// Short name for logs and diagnostics.
    fn label(&self) -> &'static str;

    fn input_slots(&self) -> &Slots;

    fn output_slots(&self) -> &Slots;

    fn input_slots_mut(&mut self) -> &mut Slots;

    fn output_slots_mut(&mut self) -> &mut Slots;

    /// Recompute output mass flows from the current input mass flows.
    ///
    /// Either every output is written or none is.
    fn update_outputs(&self, streams: &mut StreamTable) -> NetworkResult<()>;

    fn add_input(&mut self, id: StreamId) -> NetworkResult<()> {
        let label = self.label();
        let slots = self.input_slots_mut();
        if let Err(err) = slots.push(id) {
            tracing::debug!(device = label, stream = %id, %err, "input rejected");
            return Err(err);
        }
        tracing::debug!(device = label, stream = %id, slot = slots.len() - 1, "attached input");
        Ok(())
    }

    fn add_output(&mut self, id: StreamId) -> NetworkResult<()> {
        let label = self.label();
        let slots = self.output_slots_mut();
        if let Err(err) = slots.push(id) {
            tracing::debug!(device = label, stream = %id, %err, "output rejected");
            return Err(err);
        }
        tracing::debug!(device = label, stream = %id, slot = slots.len() - 1, "attached output");
        Ok(())
    }

    /// Snapshot of the input handles in insertion order.
    fn inputs(&self) -> Vec<StreamId> {
        self.input_slots().snapshot()
    }

    /// Snapshot of the output handles in insertion order.
    fn outputs(&self) -> Vec<StreamId> {
        self.output_slots().snapshot()
    }

    fn input_capacity(&self) -> usize {
        self.input_slots().capacity()
    }

    fn output_capacity(&self) -> usize {
        self.output_slots().capacity()
    }

    /// Total outflow minus total inflow; zero when mass is conserved.
    fn mass_balance(&self, streams: &StreamTable) -> NetworkResult<Real> {
        let mut inflow = 0.0;
        for &id in self.input_slots().as_slice() {
            inflow += streams.mass_flow(id)?;
        }
        let mut outflow = 0.0;
        for &id in self.output_slots().as_slice() {
            outflow += streams.mass_flow(id)?;
        }
        Ok(outflow - inflow)
    }
}

/// The closed set of device variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Device {
    Mixer(Mixer),
    Reactor(Reactor),
}

impl Device {
    pub fn mixer(input_count: usize) -> Self {
        Device::Mixer(Mixer::new(input_count))
    }

    pub fn reactor(double: bool) -> Self {
        Device::Reactor(Reactor::new(double))
    }

    fn as_dyn(&self) -> &dyn FlowDevice {
        match self {
            Device::Mixer(m) => m,
            Device::Reactor(r) => r,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn FlowDevice {
        match self {
            Device::Mixer(m) => m,
            Device::Reactor(r) => r,
        }
    }
}

impl From<Mixer> for Device {
    fn from(m: Mixer) -> Self {
        Device::Mixer(m)
    }
}

impl From<Reactor> for Device {
    fn from(r: Reactor) -> Self {
        Device::Reactor(r)
    }
}

impl FlowDevice for Device {
    fn label(&self) -> &'static str {
        self.as_dyn().label()
    }

    fn input_slots(&self) -> &Slots {
        self.as_dyn().input_slots()
    }

    fn output_slots(&self) -> &Slots {
        self.as_dyn().output_slots()
    }

    fn input_slots_mut(&mut self) -> &mut Slots {
        self.as_dyn_mut().input_slots_mut()
    }

    fn output_slots_mut(&mut self) -> &mut Slots {
        self.as_dyn_mut().output_slots_mut()
    }

    fn update_outputs(&self, streams: &mut StreamTable) -> NetworkResult<()> {
        self.as_dyn().update_outputs(streams)
    }
}
