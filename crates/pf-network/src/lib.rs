//! pf-network: streams and processing devices for procflow.
//!
//! Provides:
//! - `Stream` and the `StreamTable` registry that owns every stream
//! - Bounded input/output slots shared by all devices
//! - The `FlowDevice` contract and the `Device` variants (`Mixer`, `Reactor`)
//!
//! Devices hold `StreamId` handles, never streams. The same handle may be the
//! output of one device and the input of another, which is how networks chain.
//!
//! # Example
//!
//! ```
//! use pf_network::{FlowDevice, Mixer, StreamTable};
//!
//! let mut streams = StreamTable::new();
//! let s1 = streams.add_next();
//! let s2 = streams.add_next();
//! let s3 = streams.add_next();
//! streams.set_mass_flow(s1, 10.0).unwrap();
//! streams.set_mass_flow(s2, 5.0).unwrap();
//!
//! let mut mixer = Mixer::new(2);
//! mixer.add_input(s1).unwrap();
//! mixer.add_input(s2).unwrap();
//! mixer.add_output(s3).unwrap();
//! mixer.update_outputs(&mut streams).unwrap();
//!
//! assert_eq!(streams.mass_flow(s3).unwrap(), 15.0);
//! assert_eq!(streams.get(s3).unwrap().to_string(), "Stream s3 flow = 15");
//! ```

pub mod device;
pub mod error;
pub mod mixer;
pub mod reactor;
pub mod slots;
pub mod stream;

pub use device::{Device, FlowDevice};
pub use error::{ErrorKind, NetworkError, NetworkResult};
pub use mixer::Mixer;
pub use reactor::Reactor;
pub use slots::{SlotSide, Slots};
pub use stream::{Stream, StreamTable};
