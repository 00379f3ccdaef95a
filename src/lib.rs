//! qslide — action-value learning engine for a tile-sliding puzzle agent
//!
//! This crate provides:
//! - Durable per-configuration action-value tables behind a store port
//! - Epsilon-greedy action selection over the fixed four-move set
//! - One-step temporal-difference value updates
//! - An append-only terminal-episode outcome log
//!
//! The service boundary (HTTP or otherwise) lives outside this crate and
//! drives the [`LearningEngine`] facade. Game rules and move legality are the
//! caller's concern: the engine is told which moves are illegal, it never
//! computes them.

pub mod adapters;
pub mod app;
pub mod engine;
pub mod error;
pub mod identifiers;
pub mod learner;
pub mod policy;
pub mod ports;
pub mod recorder;
pub mod table;
pub mod types;

pub use engine::LearningEngine;
pub use error::{Error, Result};
pub use identifiers::StateKey;
pub use learner::{DEFAULT_ALPHA, DEFAULT_GAMMA, TdLearner};
pub use policy::{DEFAULT_EPSILON, EpsilonGreedy};
pub use recorder::{EpisodeOutcome, EpisodeRecorder};
pub use table::ActionValueTable;
pub use types::{ACTION_COUNT, Action};
