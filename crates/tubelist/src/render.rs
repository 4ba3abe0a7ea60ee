//! Table rendering: header and rows as style-wrapped text lines.

use crate::column::ColumnField;
use crate::item::ListItem;
use crate::layout::{Align, GUTTER, Layout, ResolvedColumn};
use crate::style::Palette;
use crate::text::{fit_width, fit_width_right, fmt_time};

/// Fits `text` into a column according to its alignment.
fn fit_column<F>(column: &ResolvedColumn<F>, text: &str) -> String {
    match column.align {
        Align::Left => fit_width(text, column.width),
        Align::Right => fit_width_right(text, column.width),
    }
}

/// Renders the header line, without style markers.
#[must_use]
pub fn header_line<F>(layout: &Layout<F>) -> String {
    layout
        .columns
        .iter()
        .map(|c| fit_column(c, &c.heading))
        .collect::<Vec<_>>()
        .join(GUTTER)
}

/// Renders one item as a table line, without style markers.
///
/// `row_number` is the 1-based number shown in the index column.
#[must_use]
pub fn row_line<T: ListItem>(layout: &Layout<T::Field>, item: &T, row_number: usize) -> String {
    layout
        .columns
        .iter()
        .map(|c| match c.field {
            ColumnField::Index => fit_width(&format!("{row_number:>2}"), c.width),
            ColumnField::Length => fit_column(c, &fmt_time(item.length())),
            ColumnField::Field(field) => fit_column(c, &item.field(field, c.width)),
        })
        .collect::<Vec<_>>()
        .join(GUTTER)
}

/// Renders a page of items as a text block.
///
/// The block starts with an empty line, followed by the underlined header
/// and one line per item. Rows alternate between the two row styles by
/// their position on the page. `first_index` is the 0-based position of
/// `page_items[0]` in the whole collection and drives the row numbers.
#[must_use]
pub fn render_table<T: ListItem>(
    layout: &Layout<T::Field>,
    page_items: &[T],
    first_index: usize,
    palette: &Palette,
) -> String {
    let mut out = String::from("\n");
    out.push_str(&palette.underline);
    out.push_str(&header_line(layout));
    out.push_str(&palette.reset);
    out.push('\n');

    for (n, item) in page_items.iter().enumerate() {
        let row_number = first_index.saturating_add(n).saturating_add(1);
        out.push_str(palette.row(n));
        out.push_str(&row_line(layout, item, row_number));
        out.push_str(&palette.reset);
        out.push('\n');
    }

    out
}
