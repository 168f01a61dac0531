//! Sequential/identical-run detection over a logical alphanumeric layout.

use crate::layout::{LayoutTable, find_coordinate};
use crate::outcome::RuleOutcome;

/// Logical layout: digits in ascending order, then letters in ascending
/// order. Row membership keeps digit runs and letter runs from mixing.
static ALPHANUMERIC: LayoutTable = &[
    &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
    &[
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
        "s", "t", "u", "v", "w", "x", "y", "z",
    ],
];

/// Rule: the password must not contain three consecutive characters that
/// are sequential (ascending or descending by one) or identical, within
/// digits or within letters. Case-insensitive.
///
/// The check is window-based, not cumulative: only a single 3-character
/// window counts, so `a1aa` passes even though every pair is a small step.
pub fn sequential_run(password: &str) -> RuleOutcome {
    let chars: Vec<char> = password.chars().collect();
    for window in chars.windows(3) {
        let coords = [
            find_coordinate(ALPHANUMERIC, window[0].to_ascii_lowercase()),
            find_coordinate(ALPHANUMERIC, window[1].to_ascii_lowercase()),
            find_coordinate(ALPHANUMERIC, window[2].to_ascii_lowercase()),
        ];
        // Characters outside the layout (symbols) exempt the whole window.
        let (Some(c1), Some(c2), Some(c3)) = (coords[0], coords[1], coords[2]) else {
            continue;
        };
        if c1.row != c2.row || c2.row != c3.row {
            continue;
        }
        let part: String = window.iter().collect();
        let steps =
            (c3.col as i64 - c2.col as i64) * (c2.col as i64 - c1.col as i64);
        // The product is 1 only when both steps are +1 or both are -1.
        if steps == 1 {
            return RuleOutcome::fail(format!(
                "contains three or more sequential characters -- {}",
                part
            ));
        }
        if c1.col == c2.col && c2.col == c3.col {
            return RuleOutcome::fail(format!(
                "contains three or more identical characters -- {}",
                part
            ));
        }
    }
    RuleOutcome::pass()
}
