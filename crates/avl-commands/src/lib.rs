//! AVL command and field catalog
//!
//! This crate defines the semantic vocabulary built on top of the
//! [`avl-packet`](avl_packet) framing layer: the descriptor constants for
//! every packet and field type, builder functions that turn typed values
//! into fields, and the record types exchanged between a ground station
//! and a vehicle:
//!
//! - [`Task`] / [`Mission`]: mission tasks, nested as serialized TASK
//!   packets inside MISSION packet fields.
//! - [`VehicleStatus`]: best-effort decode of STATUS telemetry packets.
//! - [`Parameter`] / [`ParamValue`]: named, typed vehicle parameters.
//!
//! # Example
//!
//! ```
//! use avl_commands::builders;
//!
//! // Command a vehicle to stop immediately.
//! let mut packet = builders::action_packet();
//! packet.add_field(builders::action_emergency_stop());
//! packet.add_field(builders::vehicle_id(7));
//! packet.add_field(builders::comms_channel(0));
//! let bytes = packet.to_bytes();
//! ```

pub mod builders;
pub mod descriptors;
mod error;
mod mission;
mod param;
mod status;
mod task;

pub use error::CommandError;
pub use mission::Mission;
pub use param::{ParamValue, Parameter, ParameterList};
pub use status::{CommsChannel, StatusWarning, VehicleStatus};
pub use task::{Task, TaskKind, TaskPoint};
