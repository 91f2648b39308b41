//! Material streams and the registry that owns them.

use std::fmt;
use std::io::{self, Write};

use pf_core::{MassRate, Real, StreamId, format_general, kgps};

use crate::error::{NetworkError, NetworkResult};

/// Significant digits of the flow value in the diagnostic line.
pub const PRINT_DIGITS: usize = 6;

/// A named carrier of a scalar mass flow (kg/s).
///
/// No validation is applied: empty names and zero or negative flows are
/// accepted as given. A fresh stream carries `0.0` until it is set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stream {
    name: String,
    mass_flow: Real,
}

impl Stream {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mass_flow: 0.0,
        }
    }

    /// Stream named `s<index>`.
    pub fn with_index(index: u32) -> Self {
        Self::new(format!("s{index}"))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_mass_flow(&mut self, mass_flow: Real) {
        self.mass_flow = mass_flow;
    }

    pub fn mass_flow(&self) -> Real {
        self.mass_flow
    }

    pub fn mass_rate(&self) -> MassRate {
        kgps(self.mass_flow)
    }

    /// Write `Stream <name> flow = <value>` plus a line break to `out`.
    ///
    /// The value is printed like `%g`: six significant digits, trailing
    /// zeros dropped, exponent form for magnitudes below `1e-4` or from `1e6`.
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Print the diagnostic line to standard output.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stream {} flow = {}",
            self.name,
            format_general(self.mass_flow, PRINT_DIGITS)
        )
    }
}

/// Registry owning every stream of a network.
///
/// Devices refer to streams by `StreamId`; all reads and writes go through
/// the table. `add_next` numbers streams from a counter owned by the table
/// (`s1`, `s2`, ...), independent of any other table.
#[derive(Debug, Clone, Default)]
pub struct StreamTable {
    streams: Vec<Stream>,
    next_index: u32,
}

impl StreamTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `stream` and return its handle.
    ///
    /// # Panics
    /// If the table already holds `u32::MAX` streams.
    pub fn insert(&mut self, stream: Stream) -> StreamId {
        let index = u32::try_from(self.streams.len()).expect("stream table index exceeds u32");
        let id = StreamId::from_index(index);
        tracing::debug!(stream = %id, name = stream.name(), "registered stream");
        self.streams.push(stream);
        id
    }

    pub fn add(&mut self, name: impl Into<String>) -> StreamId {
        self.insert(Stream::new(name))
    }

    /// Add a stream named `s<index>` with a caller-supplied index.
    pub fn add_indexed(&mut self, index: u32) -> StreamId {
        self.insert(Stream::with_index(index))
    }

    /// Add a stream named from this table's own sequence, starting at `s1`.
    pub fn add_next(&mut self) -> StreamId {
        self.next_index += 1;
        self.add_indexed(self.next_index)
    }

    pub fn contains(&self, id: StreamId) -> bool {
        (id.index() as usize) < self.streams.len()
    }

    pub fn get(&self, id: StreamId) -> NetworkResult<&Stream> {
        self.streams
            .get(id.index() as usize)
            .ok_or(NetworkError::UnknownStream { id })
    }

    pub fn get_mut(&mut self, id: StreamId) -> NetworkResult<&mut Stream> {
        self.streams
            .get_mut(id.index() as usize)
            .ok_or(NetworkError::UnknownStream { id })
    }

    pub fn mass_flow(&self, id: StreamId) -> NetworkResult<Real> {
        Ok(self.get(id)?.mass_flow())
    }

    pub fn set_mass_flow(&mut self, id: StreamId, mass_flow: Real) -> NetworkResult<()> {
        self.get_mut(id)?.set_mass_flow(mass_flow);
        Ok(())
    }

    /// Fail with `UnknownStream` on the first handle this table does not hold.
    pub fn check_all(&self, ids: &[StreamId]) -> NetworkResult<()> {
        match ids.iter().find(|id| !self.contains(**id)) {
            Some(&id) => Err(NetworkError::UnknownStream { id }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StreamId, &Stream)> {
        self.streams
            .iter()
            .enumerate()
            .map(|(i, s)| (StreamId::from_index(i as u32), s))
    }
}
