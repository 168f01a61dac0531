//! Substring-exclusion rule.

use crate::outcome::RuleOutcome;
use crate::rules::Rule;

/// Builds a rule that fails when the password contains `word`,
/// case-insensitively.
pub fn excludes_substring(word: &str, msg: Option<&str>) -> Rule {
    let word = word.to_lowercase();
    let msg = msg.map_or_else(
        || format!("must not contain the common word -- {}", word),
        str::to_owned,
    );
    Box::new(move |password| {
        if password.to_lowercase().contains(&word) {
            RuleOutcome::fail(msg.clone())
        } else {
            RuleOutcome::pass()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contained_word_rejected() {
        let rule = excludes_substring("peace", None);
        assert!(!rule("peace").passed());
        assert!(!rule("mypeace123").passed());
    }

    #[test]
    fn test_match_is_case_insensitive_both_ways() {
        let rule = excludes_substring("Peace", None);
        assert!(!rule("PEACE123").passed());
        assert!(!rule("pEaCe").passed());
    }

    #[test]
    fn test_unrelated_password_accepted() {
        let rule = excludes_substring("peace", None);
        assert!(rule("tranquil").passed());
        assert!(rule("yyds").passed());
    }

    #[test]
    fn test_messages() {
        let rule = excludes_substring("peace", None);
        assert_eq!(
            rule("peace").into_failure().to_string(),
            "must not contain the common word -- peace"
        );

        let rule = excludes_substring("peace", Some("banned word"));
        assert_eq!(rule("peace").into_failure().to_string(), "banned word");
    }
}
