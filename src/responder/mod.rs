//! Disease responder.
//!
//! Maps free-text prompts to a canned information block by keyword. This is a
//! pure function over the knowledge base: no state, no I/O, identical input
//! always yields identical output.

use tracing::debug;

use crate::knowledge::KnowledgeBase;

/// Returns the information block for the first keyword (in table order) found
/// in `prompt`, or the fallback block if none is found.
///
/// Never fails and never returns an empty string for a valid knowledge base.
///
/// # Examples
///
/// ```
/// use healthcare_assistant::knowledge::KnowledgeBase;
/// use healthcare_assistant::responder::respond;
///
/// let kb = KnowledgeBase::builtin();
/// assert!(respond(&kb, "I think I have diabetes").starts_with("**Diabetes Mellitus**"));
/// assert!(respond(&kb, "tell me about sleep").starts_with("**General Health Information**"));
/// ```
pub fn respond<'a>(kb: &'a KnowledgeBase, prompt: &str) -> &'a str {
    match kb.lookup(prompt) {
        Some(entry) => {
            debug!(keyword = %entry.keyword, "Prompt matched disease keyword");
            &entry.info
        }
        None => {
            debug!("No disease keyword in prompt, using fallback");
            kb.fallback()
        }
    }
}
