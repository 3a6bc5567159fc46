//! RunPod chat demo
//!
//! Walks through the common ways of calling a RunPod endpoint:
//! - a single prompt string
//! - system + human messages
//! - a multi-turn conversation
//! - per-call parameter overrides
//!
//! Requires `RUNPOD_ENDPOINT_ID` and `RUNPOD_API_KEY`.
//!
//! Run with: cargo run --example chat_demo

use anyhow::Context;
use runpod_core::{ChatModel, GenerateOptions, Message, RunPodChatModel};
use tracing_subscriber::EnvFilter;

fn section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = RunPodChatModel::from_env()
        .context("set RUNPOD_ENDPOINT_ID and RUNPOD_API_KEY to run this demo")?;
    println!("Using {:?}", model.identifying_params());

    section("Example 1: Basic usage");
    let reply = model.invoke("What is Rust programming?").await?;
    println!("Response: {}", reply.content());

    section("Example 2: Message types");
    let result = model
        .generate(
            &[
                Message::system("You are a helpful coding assistant."),
                Message::human("Explain what a Rust trait is in simple terms."),
            ],
            GenerateOptions::default(),
        )
        .await?;
    println!("Response: {}", result.content());

    section("Example 3: Multi-turn conversation");
    let mut conversation = vec![
        Message::system("You are a helpful assistant."),
        Message::human("My favorite color is blue."),
    ];
    let first = model
        .generate(&conversation, GenerateOptions::default())
        .await?;
    println!("Assistant: {}", first.content());

    conversation.push(first.into_message());
    conversation.push(Message::human("What's my favorite color?"));
    let second = model
        .generate(&conversation, GenerateOptions::default())
        .await?;
    println!("Assistant: {}", second.content());

    section("Example 4: Parameter override");
    let creative = model
        .generate(
            &[Message::human(
                "Write a creative sentence about artificial intelligence.",
            )],
            GenerateOptions::new().with_max_tokens(50).with_temperature(1.0),
        )
        .await?;
    println!("Creative response: {}", creative.content());

    let deterministic = model
        .generate(
            &[Message::human("What is 2+2?")],
            GenerateOptions::new().with_temperature(0.1),
        )
        .await?;
    println!("Deterministic response: {}", deterministic.content());

    Ok(())
}
