//! Layout tables and coordinate lookup.
//!
//! A layout table is a fixed 2D arrangement of key strings. A key string may
//! carry more than one character (an unshifted and a shifted character share
//! one physical key), and empty strings act as placeholders that keep columns
//! aligned across rows of differing length.

/// A position inside a layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

/// A borrowed 2D table of key strings.
pub type LayoutTable = &'static [&'static [&'static str]];

/// Finds the position of a character in a layout table.
///
/// Scans rows in order, then keys within a row in order, and returns the
/// first key containing `ch`. Returns `None` when the character is not on
/// the table; absence is an expected outcome for characters the layout does
/// not model, not an error.
///
/// Lookup is case-sensitive; callers lowercase the character beforehand.
pub fn find_coordinate(table: LayoutTable, ch: char) -> Option<Coordinate> {
    for (row, keys) in table.iter().enumerate() {
        for (col, key) in keys.iter().enumerate() {
            // Placeholder keys are empty and never contain anything.
            if key.contains(ch) {
                return Some(Coordinate { row, col });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: LayoutTable = &[&["1!", "2@"], &["", "q", "w"]];

    #[test]
    fn test_find_unshifted_character() {
        assert_eq!(
            find_coordinate(TABLE, '2'),
            Some(Coordinate { row: 0, col: 1 })
        );
        assert_eq!(
            find_coordinate(TABLE, 'w'),
            Some(Coordinate { row: 1, col: 2 })
        );
    }

    #[test]
    fn test_find_shifted_character_on_same_key() {
        assert_eq!(
            find_coordinate(TABLE, '!'),
            Some(Coordinate { row: 0, col: 0 })
        );
        assert_eq!(
            find_coordinate(TABLE, '@'),
            Some(Coordinate { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_placeholder_preserves_column_index() {
        assert_eq!(
            find_coordinate(TABLE, 'q'),
            Some(Coordinate { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_absent_character_is_none() {
        assert_eq!(find_coordinate(TABLE, 'z'), None);
        assert_eq!(find_coordinate(TABLE, '€'), None);
    }
}
