//! Phonetic-spelling exclusion.
//!
//! The transliteration itself is an external collaborator: any pure
//! `Fn(&str) -> String` mapping text to its romanized spelling. With the
//! `pinyin` feature enabled, [`han_to_pinyin`] provides a ready-made
//! collaborator for Chinese text and backs the schema's `pinyin` builder
//! methods.

use crate::outcome::RuleOutcome;
use crate::rules::Rule;

/// Builds a rule that fails when the password contains the phonetic
/// spelling of `text`, case-insensitively.
///
/// `create_msg` customizes the failure text from the original text and its
/// spelling; the default message names both. The collaborator is
/// deterministic, so the spelling and message are resolved once here rather
/// than on every evaluation.
pub fn excludes_phonetic<T, M>(text: &str, transliterate: T, create_msg: Option<M>) -> Rule
where
    T: Fn(&str) -> String,
    M: Fn(&str, &str) -> String,
{
    let spelling = transliterate(text).to_lowercase();
    let msg = match create_msg {
        Some(f) => f(text, &spelling),
        None => format!(
            "must not contain the phonetic spelling of {} -- {}",
            text, spelling
        ),
    };
    Box::new(move |password| {
        if password.to_lowercase().contains(&spelling) {
            RuleOutcome::fail(msg.clone())
        } else {
            RuleOutcome::pass()
        }
    })
}

/// Romanizes Chinese text with the `pinyin` crate. Characters without a
/// pinyin reading pass through unchanged.
#[cfg(feature = "pinyin")]
pub fn han_to_pinyin(text: &str) -> String {
    use pinyin::ToPinyin;

    let mut out = String::new();
    for (ch, reading) in text.chars().zip(text.to_pinyin()) {
        match reading {
            Some(p) => out.push_str(p.plain()),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_translit(text: &str) -> String {
        match text {
            "中国" => "zhongguo".to_owned(),
            other => other.to_owned(),
        }
    }

    #[test]
    fn test_spelling_in_password_rejected() {
        let rule = excludes_phonetic("中国", fake_translit, None::<fn(&str, &str) -> String>);
        assert!(!rule("zhongguo99").passed());
        assert!(!rule("ZhongGuo").passed());
    }

    #[test]
    fn test_unrelated_password_accepted() {
        let rule = excludes_phonetic("中国", fake_translit, None::<fn(&str, &str) -> String>);
        assert!(rule("tranquil42").passed());
    }

    #[test]
    fn test_default_message_names_text_and_spelling() {
        let rule = excludes_phonetic("中国", fake_translit, None::<fn(&str, &str) -> String>);
        let msg = rule("zhongguo").into_failure().to_string();
        assert!(msg.contains("中国"));
        assert!(msg.contains("zhongguo"));
    }

    #[test]
    fn test_message_factory_changes_only_the_text() {
        let rule = excludes_phonetic(
            "中国",
            fake_translit,
            Some(|han: &str, py: &str| format!("{}-{}", han, py)),
        );
        let outcome = rule("zhongguo");
        assert!(!outcome.passed());
        assert_eq!(outcome.into_failure().to_string(), "中国-zhongguo");
    }

    #[cfg(feature = "pinyin")]
    #[test]
    fn test_han_to_pinyin() {
        assert_eq!(han_to_pinyin("中国"), "zhongguo");
        assert_eq!(han_to_pinyin("负能量"), "funengliang");
        // Non-Han characters pass through.
        assert_eq!(han_to_pinyin("a中b"), "azhongb");
    }
}
