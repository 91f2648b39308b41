//! Reactor: splits its single input across one or two outputs.

use pf_core::{Real, StreamId};

use crate::device::FlowDevice;
use crate::error::NetworkResult;
use crate::slots::{SlotSide, Slots};
use crate::stream::StreamTable;

/// One input, divided evenly across 1 (single) or 2 (double) outputs.
///
/// Every declared output slot must be populated before `update_outputs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactor {
    inputs: Slots,
    outputs: Slots,
}

impl Reactor {
    pub fn new(double: bool) -> Self {
        let output_count = if double { 2 } else { 1 };
        Self {
            inputs: Slots::new(SlotSide::Input, 1, "INPUT STREAM LIMIT!"),
            outputs: Slots::new(SlotSide::Output, output_count, "OUTPUT STREAM LIMIT!"),
        }
    }

    pub fn is_double(&self) -> bool {
        self.outputs.capacity() == 2
    }
}

impl FlowDevice for Reactor {
    fn label(&self) -> &'static str {
        "reactor"
    }

    fn input_slots(&self) -> &Slots {
        &self.inputs
    }

    fn output_slots(&self) -> &Slots {
        &self.outputs
    }

    fn input_slots_mut(&mut self) -> &mut Slots {
        &mut self.inputs
    }

    fn output_slots_mut(&mut self) -> &mut Slots {
        &mut self.outputs
    }

    fn update_outputs(&self, streams: &mut StreamTable) -> NetworkResult<()> {
        let input_mass = streams.mass_flow(self.inputs.get(0)?)?;

        let slot_count = self.outputs.capacity();
        let targets = (0..slot_count)
            .map(|i| self.outputs.get(i))
            .collect::<NetworkResult<Vec<StreamId>>>()?;
        streams.check_all(&targets)?;

        let share = input_mass / slot_count as Real;
        for id in targets {
            streams.set_mass_flow(id, share)?;
        }
        tracing::trace!(input_mass, share, outputs = slot_count, "reactor updated");
        Ok(())
    }
}
