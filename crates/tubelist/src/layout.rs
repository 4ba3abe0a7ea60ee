//! Column width resolution.
//!
//! Symbolic sizes are turned into concrete widths once per render, since
//! the terminal may have been resized since the last one:
//!
//! 1. Fixed widths and the two-space gutters between columns are taken off
//!    the terminal width.
//! 2. `length` columns get a width that fits the longest duration in the
//!    whole collection, so the column does not jump between pages.
//! 3. Whatever is left goes to the `remaining` column.
//!
//! The resolved line never exceeds the terminal width as long as the
//! terminal is wide enough for the fixed columns, the gutters and the
//! duration columns, and at most one column asks for `remaining`.

use crate::column::{Column, ColumnField, ColumnSize};
use crate::item::ListItem;
use crate::text::fmt_time;

/// Separator between adjacent columns.
pub const GUTTER: &str = "  ";

/// Horizontal alignment of a column's content and heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
}

/// A column with its width decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn<F> {
    /// Position in the layout, starting at 0.
    pub index: usize,
    /// What the column displays.
    pub field: ColumnField<F>,
    /// Width in terminal columns.
    pub width: usize,
    /// Header text.
    pub heading: String,
    /// Alignment; only the `length` column is right-aligned.
    pub align: Align,
}

/// Concrete widths for every column of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<F> {
    /// Columns in display order.
    pub columns: Vec<ResolvedColumn<F>>,
}

impl<F> Layout<F> {
    /// Width of a full table line, gutters included.
    #[must_use]
    pub fn line_width(&self) -> usize {
        let content: usize = self.columns.iter().map(|c| c.width).sum();
        content.saturating_add(gutter_width(self.columns.len()))
    }
}

/// Width of the gutters between `column_count` columns.
const fn gutter_width(column_count: usize) -> usize {
    column_count.saturating_sub(1).saturating_mul(GUTTER.len())
}

/// Width needed to show every row number of `item_count` items.
///
/// Row numbers are printed at least two wide, so a fixed `idx` column
/// narrower than this is widened rather than cutting digits off.
fn index_width(item_count: usize) -> usize {
    item_count.to_string().len().max(2)
}

/// Width needed to show durations up to `max_seconds`.
///
/// `MM:SS` fits in 6 columns below 6000 s, `H:MM:SS` in 7 up to 35999 s,
/// and `HH:MM:SS` in 8 below 100 hours. Longer durations get as many
/// columns as their hour digits need.
#[must_use]
pub fn duration_width(max_seconds: u64) -> usize {
    fmt_time(max_seconds).len().max(6)
}

/// Resolves `columns` to concrete widths for a `terminal_width`-wide line.
///
/// `items` must be the whole collection, not just the visible page.
#[must_use]
pub fn resolve_layout<T: ListItem>(
    columns: &[Column<T::Field>],
    items: &[T],
    terminal_width: usize,
) -> Layout<T::Field> {
    let index_width = index_width(items.len());
    let fixed_width = |c: &Column<T::Field>| match c.size {
        ColumnSize::Fixed(n) if c.field == ColumnField::Index => Some(n.max(index_width)),
        ColumnSize::Fixed(n) => Some(n),
        ColumnSize::Remaining | ColumnSize::Length => None,
    };
    let fixed: usize = columns.iter().filter_map(fixed_width).sum();
    let length_columns = columns
        .iter()
        .filter(|c| c.size == ColumnSize::Length)
        .count();
    let remaining_columns = columns
        .iter()
        .filter(|c| c.size == ColumnSize::Remaining)
        .count();

    let length_width = if length_columns > 0 {
        let longest = items.iter().map(T::length).max().unwrap_or(0);
        duration_width(longest)
    } else {
        0
    };

    let remaining = terminal_width
        .saturating_sub(fixed)
        .saturating_sub(gutter_width(columns.len()))
        .saturating_sub(length_width.saturating_mul(length_columns));

    if remaining_columns > 1 {
        tracing::warn!(
            remaining_columns,
            width = remaining,
            "more than one \"remaining\" column; each gets the full leftover width"
        );
    }

    tracing::debug!(
        terminal_width,
        fixed,
        length_width,
        remaining,
        "resolved column layout"
    );

    let columns = columns
        .iter()
        .enumerate()
        .map(|(index, c)| ResolvedColumn {
            index,
            field: c.field,
            width: match c.size {
                ColumnSize::Fixed(_) => fixed_width(c).unwrap_or_default(),
                ColumnSize::Remaining => remaining,
                ColumnSize::Length => length_width,
            },
            heading: c.heading.clone(),
            align: if c.field == ColumnField::Length {
                Align::Right
            } else {
                Align::Left
            },
        })
        .collect();

    Layout { columns }
}
