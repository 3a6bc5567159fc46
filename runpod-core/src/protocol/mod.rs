//! Protocol module for chat request/response structures
//!
//! This module defines the provider-agnostic data model used by chat models:
//! - Ordered, role-tagged conversation messages
//! - Per-call generation overrides
//! - Single-generation results

pub mod types;

pub use types::{ChatResult, GenerateOptions, IntoMessage, Message, MessageRole};
