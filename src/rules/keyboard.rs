//! Keyboard-adjacency detection over a physical key layout.

use crate::layout::{LayoutTable, find_coordinate};
use crate::outcome::RuleOutcome;

/// A standard keyboard, four rows. Each key string holds the unshifted and
/// shifted character sharing one physical key; empty strings pad the letter
/// rows so columns line up across rows.
///
/// Rows are treated as vertically aligned columns; the real keyboard's
/// horizontal stagger (and with it diagonal adjacency) is intentionally not
/// modelled.
static KEYBOARD: LayoutTable = &[
    &[
        "~`", "1!", "2@", "3#", "4$", "5%", "6^", "7&", "8*", "9(", "0)", "-_", "=+",
    ],
    &[
        "", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[{", "]}",
    ],
    &[
        "", "a", "s", "d", "f", "g", "h", "j", "k", "l", ";:", "'\"", "",
    ],
    &[
        "", "z", "x", "c", "v", "b", "n", "m", ",<", ".>", "/?", "", "",
    ],
];

/// Rule: the password must not contain three consecutive characters whose
/// keys sit side by side in one keyboard row or stacked in one keyboard
/// column. Case-insensitive; shifted characters map to the same key as
/// their unshifted partner, so `!QAZ` flags just like `1qaz`.
pub fn adjacent_keys(password: &str) -> RuleOutcome {
    let chars: Vec<char> = password.chars().collect();
    for window in chars.windows(3) {
        let coords = [
            find_coordinate(KEYBOARD, window[0].to_ascii_lowercase()),
            find_coordinate(KEYBOARD, window[1].to_ascii_lowercase()),
            find_coordinate(KEYBOARD, window[2].to_ascii_lowercase()),
        ];
        // Characters absent from the layout exempt the whole window.
        let (Some(c1), Some(c2), Some(c3)) = (coords[0], coords[1], coords[2]) else {
            continue;
        };
        let part: String = window.iter().collect();
        // Same column: three keys stacked across consecutive rows.
        if c1.col == c2.col
            && c2.col == c3.col
            && (c3.row as i64 - c2.row as i64) * (c2.row as i64 - c1.row as i64) == 1
        {
            return RuleOutcome::fail(format!(
                "contains adjacent keyboard characters -- {}",
                part
            ));
        }
        // Same row: three keys side by side.
        if c1.row == c2.row
            && c2.row == c3.row
            && (c3.col as i64 - c2.col as i64) * (c2.col as i64 - c1.col as i64) == 1
        {
            return RuleOutcome::fail(format!(
                "contains adjacent keyboard characters -- {}",
                part
            ));
        }
    }
    RuleOutcome::pass()
}
