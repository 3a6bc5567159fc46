//! Chat model providers
//!
//! This module holds the [`ChatModel`] capability trait, the pieces every
//! provider shares (prompt rendering, output extraction, errors) and the
//! RunPod implementation.

pub mod adapter;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod runpod;

pub use adapter::{ChatModel, IdentifyingParams};
pub use error::{RunPodError, RunPodResult};
pub use extract::Extraction;
pub use prompt::render_prompt;

// Re-export concrete providers
pub use runpod::RunPodChatModel;
