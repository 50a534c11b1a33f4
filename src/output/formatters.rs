//! Formatting utilities for terminal output

use crate::core::MAX_INCORRECT;

const GALLOWS_ROWS: usize = 7;
const GALLOWS_COLS: usize = 10;

type Part = &'static [(usize, usize, char)];

/// Drawing parts in the order they appear, one per incorrect guess
const PARTS: [Part; MAX_INCORRECT] = [
    // base
    &[
        (6, 0, '='),
        (6, 1, '='),
        (6, 2, '='),
        (6, 3, '='),
        (6, 4, '='),
        (6, 5, '='),
        (6, 6, '='),
        (6, 7, '='),
        (6, 8, '='),
    ],
    // pole
    &[(1, 2, '|'), (2, 2, '|'), (3, 2, '|'), (4, 2, '|'), (5, 2, '|')],
    // beam
    &[
        (0, 2, '+'),
        (0, 3, '-'),
        (0, 4, '-'),
        (0, 5, '-'),
        (0, 6, '-'),
        (0, 7, '-'),
        (0, 8, '+'),
    ],
    // rope
    &[(1, 8, '|')],
    // head
    &[(2, 8, 'O')],
    // body
    &[(3, 8, '|')],
    // arms
    &[(3, 7, '/')],
    &[(3, 9, '\\')],
    // legs
    &[(4, 7, '/')],
    &[(4, 9, '\\')],
];

/// Draw the gallows for a number of incorrect guesses
///
/// Returns one string per row with trailing spaces trimmed. Counts above
/// `MAX_INCORRECT` draw the complete figure.
#[must_use]
pub fn gallows(misses: usize) -> Vec<String> {
    let mut grid = [[' '; GALLOWS_COLS]; GALLOWS_ROWS];

    for part in PARTS.iter().take(misses) {
        for &(row, col, ch) in *part {
            grid[row][col] = ch;
        }
    }

    grid.iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// Format letters as a spaced list, `-` when empty
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_empty_before_misses() {
        let rows = gallows(0);
        assert_eq!(rows.len(), GALLOWS_ROWS);
        assert!(rows.iter().all(String::is_empty));
    }

    #[test]
    fn gallows_first_miss_draws_base() {
        let rows = gallows(1);
        assert_eq!(rows[6], "=========");
        assert!(rows[..6].iter().all(String::is_empty));
    }

    #[test]
    fn gallows_complete_figure() {
        let expected = [
            "  +-----+",
            "  |     |",
            "  |     O",
            "  |    /|\\",
            "  |    / \\",
            "  |",
            "=========",
        ];
        assert_eq!(gallows(MAX_INCORRECT), expected);
        assert_eq!(gallows(MAX_INCORRECT + 3), expected);
    }

    #[test]
    fn gallows_grows_monotonically() {
        let ink = |rows: Vec<String>| {
            rows.iter()
                .map(|r| r.chars().filter(|c| !c.is_whitespace()).count())
                .sum::<usize>()
        };
        for misses in 1..=MAX_INCORRECT {
            assert!(ink(gallows(misses)) > ink(gallows(misses - 1)));
        }
    }

    #[test]
    fn letter_list_formats() {
        assert_eq!(letter_list(&[]), "-");
        assert_eq!(letter_list(&['B', 'C']), "B C");
    }
}
