//! Character-class-diversity rule.

use std::sync::LazyLock;

use regex::Regex;

use crate::outcome::RuleOutcome;

/// Matches passwords drawn exclusively from one or two of the four classes
/// (uppercase, lowercase, digits, symbols). One alternative per exclusive
/// pair; single-class passwords match one of them too.
static CLASS_EXCLUSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z]+|[A-Z0-9]+|[A-Z\W_]+|[a-z0-9]+|[a-z\W_]+|[0-9\W_]+)$")
        .expect("class-exclusive pattern is valid")
});

const DEFAULT_MSG: &str = "must mix at least three of uppercase, lowercase, digits and symbols";

/// Reusable rule: the password must span at least three of the four
/// character classes. Add it to a schema with
/// [`Schema::add_custom_rule`](crate::Schema::add_custom_rule).
///
/// The empty password matches none of the exclusive patterns and passes;
/// pair this rule with a minimum-length rule.
pub fn mixed_character_classes(password: &str) -> RuleOutcome {
    if CLASS_EXCLUSIVE.is_match(password) {
        RuleOutcome::fail(DEFAULT_MSG)
    } else {
        RuleOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_class_passwords_rejected() {
        for pwd in [
            "123qwe",
            "123QWE",
            "123!@#",
            "!@#QWE",
            "!()#gjier",
            "QWEqwe",
            "1859847",
            "sjfgiier",
            "$^$&#$",
            "HUHGUEA",
            "aaaaaaa1",
            "AAAA1111",
        ] {
            assert!(!mixed_character_classes(pwd).passed(), "{pwd}");
        }
    }

    #[test]
    fn test_underscore_counts_as_symbol() {
        assert!(!mixed_character_classes("qwer____").passed());
        assert!(mixed_character_classes("Qwer___1").passed());
    }

    #[test]
    fn test_three_or_more_classes_accepted() {
        for pwd in ["Aa1!", "aP3&dD", "u4js8231X", "jiwR&%(@#"] {
            assert!(mixed_character_classes(pwd).passed(), "{pwd}");
        }
    }

    #[test]
    fn test_empty_password_passes() {
        assert!(mixed_character_classes("").passed());
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            mixed_character_classes("123qwe").into_failure().to_string(),
            DEFAULT_MSG
        );
    }
}
