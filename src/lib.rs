//! Composable password validation
//!
//! This library builds password policies as an ordered set of rules:
//! length bounds, character-class diversity, sequential/identical-run
//! detection, keyboard-adjacency detection, substring exclusion and
//! phonetic-spelling (pinyin) exclusion.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation-aware evaluation and a
//!   channel-sending variant
//! - `pinyin` (default): Enables the built-in pinyin transliteration
//!   behind the `pinyin`/`pinyin_with` builder methods
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_schema::{Mode, Schema};
//! use secrecy::SecretString;
//!
//! let schema = Schema::new(Mode::ShortCircuit)
//!     .min(8, None)
//!     .max(64, None)
//!     .continuous()
//!     .keyboard()
//!     .excludes(["admin", "root"], None);
//!
//! let password = SecretString::new("uJ3&9rVx!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = schema.evaluate(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = schema.evaluate(&password);
//!
//! assert!(evaluation.passed());
//! ```

// Internal modules
mod layout;
mod outcome;
mod schema;
mod wordlist;

pub mod rules;

// Public API
pub use layout::{Coordinate, LayoutTable, find_coordinate};
pub use outcome::{Evaluation, Mode, RuleFailure, RuleOutcome};
pub use rules::Rule;
pub use schema::Schema;
pub use wordlist::{WordlistError, load_wordlist};
