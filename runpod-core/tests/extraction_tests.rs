//! Table-driven tests for worker output extraction

use runpod_core::providers::Extraction;
use serde_json::{json, Value};
use test_case::test_case;

#[test_case(json!([{"choices": [{"tokens": ["Hel", "lo"]}]}]), "Hello" ; "expected layout")]
#[test_case(json!([{"choices": [{"tokens": ["a", 1, true]}]}]), "a1true" ; "non string tokens")]
#[test_case(json!([{"choices": [{"tokens": []}]}]), "" ; "no tokens")]
#[test_case(json!([{"choices": [{"tokens": ["x"]}], "usage": {"input": 1}}]), "x" ; "extra fields ignored")]
fn matched(output: Value, expected: &str) {
    let extraction = Extraction::from_output(&output);
    assert!(extraction.is_matched());
    assert_eq!(extraction.into_text(), expected);
}

#[test_case(json!({"unexpected": "shape"}), r#"{"unexpected":"shape"}"# ; "object output")]
#[test_case(json!([]), "[]" ; "empty list")]
#[test_case(json!(["plain"]), r#"["plain"]"# ; "first item not an object")]
#[test_case(json!([{"text": "hi"}]), r#"[{"text":"hi"}]"# ; "no choices key")]
#[test_case(json!([{"choices": []}]), r#"[{"choices":[]}]"# ; "empty choices")]
#[test_case(json!([{"choices": "nope"}]), r#"[{"choices":"nope"}]"# ; "choices not a list")]
#[test_case(json!([{"choices": [{"text": "hi"}]}]), r#"[{"choices":[{"text":"hi"}]}]"# ; "no tokens key")]
#[test_case(json!([{"choices": [{"tokens": "Hello"}]}]), r#"[{"choices":[{"tokens":"Hello"}]}]"# ; "tokens not a list")]
#[test_case(json!("raw text"), "raw text" ; "string output")]
#[test_case(json!(null), "null" ; "null output")]
#[test_case(json!(42), "42" ; "number output")]
fn unmatched(output: Value, expected: &str) {
    let extraction = Extraction::from_output(&output);
    assert_eq!(extraction, Extraction::Unmatched(output.clone()));
    assert_eq!(extraction.into_text(), expected);
}
