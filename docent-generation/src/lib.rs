//! # docent-generation
//!
//! Turns a selected room's text plus a visitor question into a short
//! grounded answer. Grounding is enforced through prompt contracts and the
//! fixed refusal string; there is no access to model internals.

pub mod generator;
pub mod prompts;

pub use generator::Generator;
