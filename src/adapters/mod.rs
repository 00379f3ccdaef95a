//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! domain ports, not the other way around.

pub mod in_memory;
pub mod jsonl_episode_log;
pub mod msgpack_store;

pub use in_memory::{InMemoryEpisodeLog, InMemoryStore};
pub use jsonl_episode_log::JsonlEpisodeLog;
pub use msgpack_store::MsgPackStore;
