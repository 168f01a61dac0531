//! Password schema - rule registration and evaluation.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::outcome::{Evaluation, Mode, RuleOutcome};
use crate::rules::{
    self, Rule, excludes_substring, length_at_least, length_at_most,
};
use crate::wordlist::{WordlistError, load_wordlist};

/// An ordered set of password rules with a fixed evaluation mode.
///
/// Rules are appended through the chainable builder methods and evaluated
/// in insertion order. Insertion order decides which failure is reported in
/// short-circuit mode and the report order in collect-all mode.
///
/// The intended lifecycle is build-then-evaluate: configure the schema
/// once, then evaluate any number of passwords against it. Evaluation takes
/// `&self` and rules are pure, so repeated evaluations are independent.
pub struct Schema {
    mode: Mode,
    rules: Vec<Rule>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl Schema {
    /// Creates an empty schema. The mode cannot change afterwards.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            rules: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Requires at least `len` characters.
    pub fn min(mut self, len: usize, msg: Option<&str>) -> Self {
        self.rules.push(length_at_least(len, msg));
        self
    }

    /// Allows at most `len` characters.
    pub fn max(mut self, len: usize, msg: Option<&str>) -> Self {
        self.rules.push(length_at_most(len, msg));
        self
    }

    /// Rejects three consecutive sequential or identical letters/digits.
    pub fn continuous(mut self) -> Self {
        self.rules.push(Box::new(rules::sequential_run));
        self
    }

    /// Rejects three consecutive characters adjacent on the keyboard.
    pub fn keyboard(mut self) -> Self {
        self.rules.push(Box::new(rules::adjacent_keys));
        self
    }

    /// Rejects passwords containing the pinyin spelling of the given
    /// Chinese text, one rule per text.
    #[cfg(feature = "pinyin")]
    pub fn pinyin<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            self.rules.push(rules::excludes_phonetic(
                text.as_ref(),
                rules::phonetic::han_to_pinyin,
                None::<fn(&str, &str) -> String>,
            ));
        }
        self
    }

    /// Like [`pinyin`](Self::pinyin), with a message factory receiving the
    /// original text and its pinyin spelling.
    #[cfg(feature = "pinyin")]
    pub fn pinyin_with<I, S, F>(mut self, texts: I, create_msg: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str, &str) -> String,
    {
        for text in texts {
            self.rules.push(rules::excludes_phonetic(
                text.as_ref(),
                rules::phonetic::han_to_pinyin,
                Some(&create_msg),
            ));
        }
        self
    }

    /// Rejects passwords containing any of the given words,
    /// case-insensitively. One rule is appended per word.
    pub fn excludes<I, S>(mut self, words: I, msg: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.rules.push(excludes_substring(word.as_ref(), msg));
        }
        self
    }

    /// Loads an exclusion-word file and appends one substring rule per
    /// word.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or empty.
    pub fn excludes_from_file<P: AsRef<std::path::Path>>(
        self,
        path: P,
        msg: Option<&str>,
    ) -> Result<Self, WordlistError> {
        let words = load_wordlist(path)?;
        Ok(self.excludes(words, msg))
    }

    /// Appends a caller-supplied rule predicate as-is.
    pub fn add_custom_rule<R>(mut self, rule: R) -> Self
    where
        R: Fn(&str) -> RuleOutcome + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Empties the rule set in place.
    pub fn clear_rules(&mut self) -> &mut Self {
        self.rules.clear();
        self
    }

    /// Evaluates a password against every registered rule.
    ///
    /// With an empty rule set the result is `Success` regardless of mode.
    /// In short-circuit mode the first failing rule ends the run and the
    /// remaining rules are never invoked; in collect-all mode every rule
    /// runs and all failures are reported in rule order, so the result is
    /// `Failures` even when the list is empty.
    ///
    /// # Arguments
    /// * `password` - The password to evaluate
    /// * `token` - Optional cancellation token (async feature only),
    ///   checked before each rule
    pub fn evaluate(
        &self,
        password: &SecretString,
        #[cfg(feature = "async")] token: Option<&CancellationToken>,
    ) -> Evaluation {
        let pwd = password.expose_secret();

        if self.rules.is_empty() {
            return Evaluation::Success;
        }

        match self.mode {
            Mode::ShortCircuit => {
                for rule in &self.rules {
                    #[cfg(feature = "async")]
                    if token.is_some_and(|t| t.is_cancelled()) {
                        #[cfg(feature = "tracing")]
                        tracing::info!("evaluation cancelled");
                        return Evaluation::Cancelled;
                    }

                    let outcome = rule(pwd);
                    if !outcome.passed() {
                        let failure = outcome.into_failure();
                        #[cfg(feature = "tracing")]
                        tracing::debug!("rule failed: {}", failure);
                        return Evaluation::Failure(failure);
                    }
                }
                Evaluation::Success
            }
            Mode::CollectAll => {
                let mut failures = Vec::new();
                for rule in &self.rules {
                    #[cfg(feature = "async")]
                    if token.is_some_and(|t| t.is_cancelled()) {
                        #[cfg(feature = "tracing")]
                        tracing::info!("evaluation cancelled");
                        return Evaluation::Cancelled;
                    }

                    let outcome = rule(pwd);
                    if !outcome.passed() {
                        let failure = outcome.into_failure();
                        #[cfg(feature = "tracing")]
                        tracing::debug!("rule failed: {}", failure);
                        failures.push(failure);
                    }
                }
                Evaluation::Failures(failures)
            }
        }
    }

    /// Async variant that sends the evaluation result via channel.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Evaluation>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation is about to start...");

        let evaluation = self.evaluate(password, Some(&token));

        if let Err(_e) = tx.send(evaluation).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send evaluation result: {}", _e);
        }
    }
}
