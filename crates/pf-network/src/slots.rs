//! Bounded, ordered collections of stream handles.

use pf_core::StreamId;

use crate::error::{NetworkError, NetworkResult};

/// Which side of a device a slot list sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotSide {
    Input,
    Output,
}

impl SlotSide {
    pub fn label(self) -> &'static str {
        match self {
            SlotSide::Input => "input stream",
            SlotSide::Output => "output stream",
        }
    }
}

/// Ordered stream handles with a fixed capacity.
///
/// Capacity is checked on every push and never afterwards; a rejected push
/// leaves the list untouched. Index 0 is the first handle pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    side: SlotSide,
    capacity: usize,
    overflow_message: &'static str,
    streams: Vec<StreamId>,
}

impl Slots {
    pub fn new(side: SlotSide, capacity: usize, overflow_message: &'static str) -> Self {
        Self {
            side,
            capacity,
            overflow_message,
            streams: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.streams.len() >= self.capacity
    }

    /// Append a handle, or fail with the side's limit error when full.
    pub fn push(&mut self, id: StreamId) -> NetworkResult<()> {
        if self.is_full() {
            return Err(self.overflow());
        }
        self.streams.push(id);
        Ok(())
    }

    /// Handle at `index`, or `MissingElement` if that slot is not populated.
    pub fn get(&self, index: usize) -> NetworkResult<StreamId> {
        self.streams
            .get(index)
            .copied()
            .ok_or(NetworkError::MissingElement {
                what: self.side.label(),
                index,
                len: self.streams.len(),
            })
    }

    pub fn as_slice(&self) -> &[StreamId] {
        &self.streams
    }

    /// Independent copy of the handles in insertion order.
    pub fn snapshot(&self) -> Vec<StreamId> {
        self.streams.clone()
    }

    fn overflow(&self) -> NetworkError {
        match self.side {
            SlotSide::Input => NetworkError::InputLimitExceeded {
                message: self.overflow_message,
                capacity: self.capacity,
            },
            SlotSide::Output => NetworkError::OutputLimitExceeded {
                message: self.overflow_message,
                capacity: self.capacity,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pf_core::Id;

    #[test]
    fn push_until_full_then_reject() {
        let mut slots = Slots::new(SlotSide::Input, 2, "full");
        slots.push(Id::from_index(0)).unwrap();
        slots.push(Id::from_index(1)).unwrap();
        assert!(slots.is_full());

        let err = slots.push(Id::from_index(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputLimitExceeded);
        assert_eq!(err.to_string(), "full");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.as_slice(), &[Id::from_index(0), Id::from_index(1)]);
    }

    #[test]
    fn zero_capacity_rejects_first_push() {
        let mut slots = Slots::new(SlotSide::Output, 0, "none allowed");
        let err = slots.push(Id::from_index(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutputLimitExceeded);
        assert!(slots.is_empty());
    }

    #[test]
    fn get_missing_slot() {
        let slots = Slots::new(SlotSide::Output, 2, "full");
        let err = slots.get(1).unwrap_err();
        assert_eq!(
            err,
            NetworkError::MissingElement {
                what: "output stream",
                index: 1,
                len: 0,
            }
        );
    }

    #[test]
    fn snapshot_is_independent() {
        let mut slots = Slots::new(SlotSide::Input, 3, "full");
        slots.push(Id::from_index(4)).unwrap();
        let mut copy = slots.snapshot();
        copy.push(Id::from_index(5));
        copy.clear();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots.get(0).unwrap(), Id::from_index(4));
    }
}
