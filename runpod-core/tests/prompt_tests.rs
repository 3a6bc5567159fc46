//! Property tests for prompt rendering

use proptest::prelude::*;
use runpod_core::providers::render_prompt;
use runpod_core::Message;

fn message_strategy() -> impl Strategy<Value = Message> {
    // Content without newlines so lines map one-to-one onto messages
    let content = "[a-zA-Z0-9 .,?!]{0,24}";
    prop_oneof![
        content.prop_map(|c| Message::system(c)),
        content.prop_map(|c| Message::human(c)),
        content.prop_map(|c| Message::assistant(c)),
        content.prop_map(|c| Message::custom("tool", c)),
    ]
}

fn expected_line(message: &Message) -> String {
    match message.role().label() {
        Some(label) => format!("{}: {}", label, message.content()),
        None => message.content().to_string(),
    }
}

proptest! {
    #[test]
    fn rendering_preserves_order_and_prefixes(messages in prop::collection::vec(message_strategy(), 1..12)) {
        let prompt = render_prompt(&messages);
        let lines: Vec<&str> = prompt.split('\n').collect();

        prop_assert_eq!(lines.len(), messages.len());
        for (line, message) in lines.iter().zip(&messages) {
            prop_assert_eq!(*line, expected_line(message));
        }
    }

    #[test]
    fn custom_roles_have_no_prefix(content in "[a-z ]{1,20}") {
        let prompt = render_prompt(&[Message::custom("function", content.clone())]);
        prop_assert_eq!(prompt, content);
    }
}

#[test]
fn test_documented_example() {
    assert_eq!(
        render_prompt(&[Message::system("a"), Message::human("b")]),
        "System: a\nHuman: b"
    );
}
