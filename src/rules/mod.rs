//! The rule library.
//!
//! Each submodule builds rule predicates for one password property. A rule
//! is a pure function from the password text to a [`RuleOutcome`]; the
//! factories here close over their configuration and share no mutable state
//! between invocations.

mod exclusion;
mod keyboard;
mod length;
pub mod phonetic;
mod sequence;
mod variety;

pub use exclusion::excludes_substring;
pub use keyboard::adjacent_keys;
pub use length::{length_at_least, length_at_most};
pub use phonetic::excludes_phonetic;
pub use sequence::sequential_run;
pub use variety::mixed_character_classes;

use crate::outcome::RuleOutcome;

/// A boxed rule predicate, as stored by the schema.
pub type Rule = Box<dyn Fn(&str) -> RuleOutcome + Send + Sync>;
