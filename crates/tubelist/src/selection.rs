//! Parsing of free-form row selections such as `"1,3,5-7"`.
//!
//! Tokens are comma separated. A token of ASCII digits picks one row, two
//! digit runs joined by a single `-` pick an inclusive range of rows. Row
//! numbers are 1-based, so `"2-4"` picks rows 2, 3 and 4 (0-based 1..=3).
//! Anything else is dropped without error.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ListViewError;

/// Regex for `<first>-<last>` range tokens.
#[allow(clippy::expect_used)]
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)-([0-9]+)$").expect("failed to compile selection range regex")
});

/// One accepted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// A single 1-based row.
    Row(usize),
    /// Rows `first..=last`, 1-based. Empty when `first > last`.
    Rows {
        /// First row picked.
        first: usize,
        /// Last row picked.
        last: usize,
    },
}

/// A parsed selection, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    picks: Vec<Pick>,
}

/// Parses a row number; digit runs too long for `usize` saturate so they
/// surface as out of range when resolved.
fn parse_row(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

/// Parses one token, or `None` when it should be dropped.
fn parse_token(token: &str) -> Option<Pick> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Pick::Row(parse_row(token)));
    }
    let caps = RANGE_RE.captures(token)?;
    let first = parse_row(caps.get(1)?.as_str());
    let last = parse_row(caps.get(2)?.as_str());
    Some(Pick::Rows { first, last })
}

/// Parses a selection line.
///
/// Never fails: malformed tokens are logged at debug level and skipped.
#[must_use]
pub fn parse_selection(input: &str) -> Selection {
    let picks = input
        .split(',')
        .map(str::trim)
        .filter_map(|token| {
            let pick = parse_token(token);
            if pick.is_none() && !token.is_empty() {
                tracing::debug!(token, "dropping unrecognised selection token");
            }
            pick
        })
        .collect();
    Selection { picks }
}

/// Converts a 1-based row into a 0-based index into `available` rows.
const fn to_index(row: usize, available: usize) -> Result<usize, ListViewError> {
    if row == 0 || row > available {
        return Err(ListViewError::IndexOutOfRange { row, available });
    }
    Ok(row.saturating_sub(1))
}

impl Selection {
    /// Accepted tokens in input order.
    #[must_use]
    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    /// Whether no token was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Resolves the selection to 0-based indices into `available` rows.
    ///
    /// Order follows the input; duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::IndexOutOfRange`] for the first row that is
    /// zero or greater than `available`.
    pub fn resolve(&self, available: usize) -> Result<Vec<usize>, ListViewError> {
        let mut indices = Vec::new();
        for pick in &self.picks {
            match *pick {
                Pick::Row(row) => indices.push(to_index(row, available)?),
                Pick::Rows { first, last } => {
                    for row in first..=last {
                        indices.push(to_index(row, available)?);
                    }
                }
            }
        }
        Ok(indices)
    }
}
