//! RunPod provider implementation
//!
//! This module provides an adapter for RunPod serverless endpoints,
//! translating between the chat protocol and the `runsync` wire format.

mod client;
pub mod converter;
pub mod types;

pub use client::{RunPodChatModel, LLM_TYPE};
pub use types::{RunSyncInput, RunSyncRequest, RunSyncResponse};
