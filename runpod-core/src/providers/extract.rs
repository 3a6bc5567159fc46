//! Extraction of generated text from loosely-typed worker output
//!
//! Workers normally answer with `[{"choices": [{"tokens": ["Hel", "lo"]}]}]`,
//! but the layout is not guaranteed. Extraction peels one level at a time and
//! stops at the first level that does not match, handing back the raw value
//! so the caller can fall back to its string form.

use serde_json::Value;

/// Outcome of matching worker output against the token layout
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Output had the expected layout; tokens joined in order
    Matched(String),
    /// Output had some other layout
    Unmatched(Value),
}

impl Extraction {
    /// Run the attempt-parse chain over `output`
    pub fn from_output(output: &Value) -> Self {
        match token_list(output) {
            Some(tokens) => Extraction::Matched(tokens.iter().map(stringify).collect()),
            None => Extraction::Unmatched(output.clone()),
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Extraction::Matched(_))
    }

    /// Final text: joined tokens, or the string form of the raw output
    pub fn into_text(self) -> String {
        match self {
            Extraction::Matched(text) => text,
            Extraction::Unmatched(raw) => stringify(&raw),
        }
    }
}

/// `output[0].choices[0].tokens`, if every level has the expected type
fn token_list(output: &Value) -> Option<&Vec<Value>> {
    let first_item = output.as_array()?.first()?;
    let first_choice = first_item.as_object()?.get("choices")?.as_array()?.first()?;
    first_choice.as_object()?.get("tokens")?.as_array()
}

/// String form of a JSON value
///
/// Strings render as their raw contents; everything else as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
