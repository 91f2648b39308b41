//! Mixer: merges any number of inputs into its output.

use pf_core::Real;

use crate::device::FlowDevice;
use crate::error::{NetworkError, NetworkResult};
use crate::slots::{SlotSide, Slots};
use crate::stream::StreamTable;

/// Number of outputs a mixer accepts.
pub const MIXER_OUTPUTS: usize = 1;

/// Sums all input flows and divides the sum evenly across the outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mixer {
    inputs: Slots,
    outputs: Slots,
}

impl Mixer {
    /// Mixer accepting at most `input_count` inputs.
    pub fn new(input_count: usize) -> Self {
        Self {
            inputs: Slots::new(SlotSide::Input, input_count, "Too much inputs"),
            outputs: Slots::new(SlotSide::Output, MIXER_OUTPUTS, "Too much outputs"),
        }
    }
}

impl FlowDevice for Mixer {
    fn label(&self) -> &'static str {
        "mixer"
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
        if self.outputs.is_empty() {
            return Err(NetworkError::NoOutputsConfigured {
                message: "Should set outputs before update",
            });
        }

        let mut total: Real = 0.0;
        for &id in self.inputs.as_slice() {
            total += streams.mass_flow(id)?;
        }
        streams.check_all(self.outputs.as_slice())?;

        let share = total / self.outputs.len() as Real;
        for &id in self.outputs.as_slice() {
            streams.set_mass_flow(id, share)?;
        }
        tracing::trace!(
            inputs = self.inputs.len(),
            outputs = self.outputs.len(),
            total,
            share,
            "mixer updated"
        );
        Ok(())
    }
}
