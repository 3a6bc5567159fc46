//! RunPod Core Library
//!
//! This crate exposes RunPod serverless text-generation endpoints through the
//! [`ChatModel`] capability trait.
//!
//! ```no_run
//! use runpod_core::{ChatModel, GenerateOptions, Message, RunPodChatModel, RunPodConfig};
//!
//! # async fn run() -> Result<(), runpod_core::RunPodError> {
//! let model = RunPodChatModel::new(RunPodConfig::new("my-endpoint", "rp_api_key"))?;
//! let result = model
//!     .generate(
//!         &[
//!             Message::system("You are a helpful assistant."),
//!             Message::human("What is Rust?"),
//!         ],
//!         GenerateOptions::new().with_max_tokens(128),
//!     )
//!     .await?;
//! println!("{}", result.content());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;
pub mod protocol;
pub mod providers;

pub use config::RunPodConfig;
pub use protocol::{ChatResult, GenerateOptions, IntoMessage, Message, MessageRole};
pub use providers::{ChatModel, IdentifyingParams, RunPodChatModel, RunPodError, RunPodResult};

/// Returns the version of the RunPod Core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
