//! Length-bound rules.

use crate::outcome::RuleOutcome;
use crate::rules::Rule;

/// Builds a rule that fails when the password is shorter than `len`
/// characters.
pub fn length_at_least(len: usize, msg: Option<&str>) -> Rule {
    let msg = msg.map_or_else(
        || format!("must be at least {} characters", len),
        str::to_owned,
    );
    Box::new(move |password| {
        if password.chars().count() < len {
            RuleOutcome::fail(msg.clone())
        } else {
            RuleOutcome::pass()
        }
    })
}

/// Builds a rule that fails when the password is longer than `len`
/// characters.
pub fn length_at_most(len: usize, msg: Option<&str>) -> Rule {
    let msg = msg.map_or_else(
        || format!("must not exceed {} characters", len),
        str::to_owned,
    );
    Box::new(move |password| {
        if password.chars().count() > len {
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
    fn test_min_length_too_short() {
        let rule = length_at_least(8, None);
        let outcome = rule("1234qwe");
        assert!(!outcome.passed());
        assert_eq!(
            outcome.into_failure().to_string(),
            "must be at least 8 characters"
        );
    }

    #[test]
    fn test_min_length_exact_boundary() {
        let rule = length_at_least(8, None);
        assert!(rule("12345678").passed());
    }

    #[test]
    fn test_max_length_exceeded() {
        let rule = length_at_most(16, None);
        assert!(!rule("1234qwert1234qwert").passed());
        assert!(rule("1234qwert1234qwe").passed());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rule = length_at_most(4, None);
        assert!(rule("中国中国").passed());
    }

    #[test]
    fn test_custom_message() {
        let rule = length_at_least(8, Some("pick a longer one"));
        assert_eq!(
            rule("short").into_failure().to_string(),
            "pick a longer one"
        );
    }
}
