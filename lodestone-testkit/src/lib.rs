//! Test doubles for the Lodestone host seams.
//!
//! Provides in-memory implementations of the traits the host server would
//! normally implement:
//!
//! - [`TestWorld`] — a map of explicitly placed blocks over endless air
//! - [`TestHost`] — explicit worlds plus a record of every teleport
//! - [`TestSender`] — a command sender that records the messages it receives
//!
//! Used by the unit tests, the integration tests and the benches of
//! `lodestone-core`.

mod host;
mod sender;
mod world;

pub use host::{TeleportCall, TestHost};
pub use sender::TestSender;
pub use world::TestWorld;
