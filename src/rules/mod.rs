//! Rule logic for Dariba.
//!
//! This module implements the rule set:
//! - Line-length primitive shared by placement, movement, and strikes
//! - Elimination win condition
//! - The engine state machine tying it all together

pub mod engine;
pub mod lines;
pub mod victory;

// Re-exports for convenient access
pub use engine::{Engine, Response};
pub use lines::max_run_through;
pub use victory::{live_keys, winner_by_elimination};
