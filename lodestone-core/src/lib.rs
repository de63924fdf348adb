//! # Lodestone
//!
//! Core logic for a "return to last safe location" service.
//!
//! The service watches every online player once per server tick, detects
//! teleport-like movement (large jumps or dimension changes), and remembers
//! the position each player left behind. A zero-argument `back` command
//! teleports the requesting player to a standable position near that saved
//! location.
//!
//! The host server stays behind narrow seams: it feeds
//! [`tracker::PlayerSnapshot`]s into [`service::BackService::on_tick`],
//! implements [`world::WorldView`] and [`service::BackHost`] for block
//! queries and the teleport side effect, and routes chat input through
//! [`command::CommandDispatcher`].

pub mod command;
pub mod config;
pub mod error;
pub mod finder;
pub mod service;
pub mod tracker;
pub mod world;

pub use command::CommandDispatcher;
pub use config::BackConfig;
pub use error::BackError;
pub use service::{BackHost, BackService};
pub use tracker::{LocationTracker, PlayerLocation, PlayerSnapshot};
pub use world::WorldView;
