//! Shared test utilities and arbitrary generators for property-based testing.

use crate::knowledge::KnowledgeBase;
use crate::types::Priority;
use proptest::prelude::*;

/// ASCII prose with no letters outside `a-z`, suitable for padding prompts.
///
/// May still contain a keyword by chance; filter with [`keywords_in`].
pub fn arb_keyword_free_text() -> impl Strategy<Value = String> {
    "[a-z ,.?]{0,30}".prop_map(String::from)
}

/// A system type label within the accepted 3..=50 character bounds.
pub fn arb_system_type() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 -]{2,49}".prop_map(String::from)
}

/// A requirement description within the accepted 10..=1000 character bounds.
pub fn arb_requirement() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ,.]{9,200}".prop_map(String::from)
}

pub fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Critical),
    ]
}

pub fn arb_compliance() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][A-Z0-9-]{1,10}", 0..5)
}

/// Upper-cases the characters of `word` whose position is set in `mask`.
pub fn mix_case(word: &str, mask: &[bool]) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask.get(i).copied().unwrap_or(false) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// All keywords of `kb` that occur in `prompt`, in table order.
pub fn keywords_in<'a>(kb: &'a KnowledgeBase, prompt: &str) -> Vec<&'a str> {
    let lowered = prompt.to_lowercase();
    kb.entries()
        .iter()
        .map(|e| e.keyword.as_str())
        .filter(|k| lowered.contains(k))
        .collect()
}
