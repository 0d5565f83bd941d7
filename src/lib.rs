//! Healthcare Assistant - a mock healthcare demo API.
//!
//! Serves canned disease information for free-text prompts, templated test
//! cases for healthcare requirements, and plaintext demo authentication. All
//! "intelligence" is table lookup; nothing is persisted.

pub mod auth;
pub mod config;
pub mod generator;
pub mod knowledge;
pub mod responder;
pub mod server;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
