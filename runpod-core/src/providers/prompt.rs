//! Flattening a conversation into a single prompt string

use crate::protocol::Message;

/// Render one message as a prompt line
///
/// Known roles are prefixed with their label (`"Human: ..."`); custom roles
/// contribute their bare content.
pub fn render_message(message: &Message) -> String {
    match message.role().label() {
        Some(label) => format!("{}: {}", label, message.content()),
        None => message.content().to_string(),
    }
}

/// Render a conversation into a prompt, one message per line in order
pub fn render_prompt(messages: &[Message]) -> String {
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}
