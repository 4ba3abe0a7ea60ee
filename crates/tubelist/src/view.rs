//! The list view: columns, items, current page and selection callback.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnSpec, typed_columns};
use crate::error::ListViewError;
use crate::geometry::{Geometry, GeometrySource};
use crate::item::ListItem;
use crate::layout::resolve_layout;
use crate::pager;
use crate::render::render_table;
use crate::selection::parse_selection;
use crate::style::Palette;

/// Which rows a typed selection number refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionScope {
    /// Row `n` is the `n`-th item of the current page.
    #[default]
    Page,
    /// Row `n` is the `n`-th item of the whole collection, matching the
    /// numbers shown in the index column.
    Collection,
}

/// Callback receiving the extracted values of a selection.
pub type SelectCallback<O> = Box<dyn FnMut(Vec<O>)>;

/// A paginated, column-aligned view over a single-variant item collection.
///
/// The collection is never empty. The current page is always within
/// `[0, num_pages() - 1]` for the geometry last observed.
#[allow(clippy::module_name_repetitions)]
pub struct ListView<T: ListItem> {
    columns: Vec<Column<T::Field>>,
    items: Vec<T>,
    page: usize,
    scope: SelectionScope,
    palette: Palette,
    geometry: Box<dyn GeometrySource>,
    on_select: Option<SelectCallback<T::Output>>,
}

impl<T: ListItem> fmt::Debug for ListView<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("columns", &self.columns)
            .field("items", &self.items)
            .field("page", &self.page)
            .field("scope", &self.scope)
            .field("has_callback", &self.on_select.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: ListItem> ListView<T> {
    /// Creates a view over `items` laid out with `columns`.
    ///
    /// The view starts on page 0, with a plain palette, page-scoped
    /// selection and no callback.
    ///
    /// # Errors
    ///
    /// - [`ListViewError::EmptyCollection`] if `items` is empty.
    /// - [`ListViewError::UnknownColumn`] if a column names a field `T`
    ///   does not have.
    pub fn new(
        columns: &[ColumnSpec],
        items: Vec<T>,
        geometry: impl GeometrySource + 'static,
    ) -> Result<Self, ListViewError> {
        if items.is_empty() {
            return Err(ListViewError::EmptyCollection);
        }
        let columns = typed_columns::<T>(columns)?;
        tracing::debug!(
            kind = %T::KIND,
            items = items.len(),
            columns = columns.len(),
            "list view created"
        );
        Ok(Self {
            columns,
            items,
            page: 0,
            scope: SelectionScope::default(),
            palette: Palette::default(),
            geometry: Box::new(geometry),
            on_select: None,
        })
    }

    /// Sets the style markers used when rendering.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets what typed row numbers refer to.
    #[must_use]
    pub const fn with_scope(mut self, scope: SelectionScope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the callback invoked by [`Self::handle_selection`].
    #[must_use]
    pub fn with_callback(mut self, callback: impl FnMut(Vec<T::Output>) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// All items, in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Current page, 0-based, clamped to the pages available now.
    #[must_use]
    pub fn page(&self) -> usize {
        self.clamped_page(self.geometry())
    }

    /// The stored page clamped against `geometry`, which may have shrunk
    /// the page count since the page was set.
    fn clamped_page(&self, geometry: Geometry) -> usize {
        pager::clamp_page(self.page, self.items.len(), geometry.max_results)
    }

    fn geometry(&self) -> Geometry {
        self.geometry.geometry()
    }

    /// Number of pages for the current terminal height.
    #[must_use]
    pub fn num_pages(&self) -> usize {
        pager::num_pages(self.items.len(), self.geometry().max_results)
    }

    /// Moves to page `page`, clamped to the available pages.
    pub fn set_page(&mut self, page: usize) {
        let page_size = self.geometry().max_results;
        self.page = pager::clamp_page(page, self.items.len(), page_size);
    }

    /// Moves one page forward. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        let before = self.page();
        self.set_page(before.saturating_add(1));
        self.page != before
    }

    /// Moves one page back. Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        let before = self.page();
        self.set_page(before.saturating_sub(1));
        self.page != before
    }

    /// Index range of the current page within [`Self::items`].
    fn page_range(&self, geometry: Geometry) -> Range<usize> {
        pager::page_bounds(
            self.clamped_page(geometry),
            geometry.max_results,
            self.items.len(),
        )
    }

    /// Items shown on the current page.
    #[must_use]
    pub fn page_items(&self) -> &[T] {
        let range = self.page_range(self.geometry());
        self.items.get(range).unwrap_or_default()
    }

    /// Renders the current page.
    #[must_use]
    pub fn render(&self) -> String {
        let geometry = self.geometry();
        let layout = resolve_layout(&self.columns, &self.items, geometry.width);
        let range = self.page_range(geometry);
        let page_items = self.items.get(range.clone()).unwrap_or_default();
        render_table(&layout, page_items, range.start, &self.palette)
    }

    /// Moves to `page` (clamped) and renders it.
    pub fn render_page(&mut self, page: usize) -> String {
        self.set_page(page);
        self.render()
    }

    /// Resolves `input` to positions in [`Self::items`].
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::IndexOutOfRange`] if a row does not exist in
    /// the selection scope.
    pub fn selected_indices(&self, input: &str) -> Result<Vec<usize>, ListViewError> {
        let selection = parse_selection(input);
        match self.scope {
            SelectionScope::Page => {
                let range = self.page_range(self.geometry());
                let indices = selection.resolve(range.len())?;
                Ok(indices
                    .into_iter()
                    .map(|i| i.saturating_add(range.start))
                    .collect())
            }
            SelectionScope::Collection => selection.resolve(self.items.len()),
        }
    }

    /// Extracts the values of the rows picked by `input`, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::IndexOutOfRange`] if a row does not exist in
    /// the selection scope.
    pub fn select(&self, input: &str) -> Result<Vec<T::Output>, ListViewError> {
        let indices = self.selected_indices(input)?;
        Ok(indices
            .into_iter()
            .filter_map(|i| self.items.get(i))
            .map(T::extract)
            .collect())
    }

    /// Extracts the rows picked by `input` and hands them to the callback.
    ///
    /// Without a callback the values are extracted and discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::IndexOutOfRange`] if a row does not exist in
    /// the selection scope; the callback is not invoked in that case.
    pub fn handle_selection(&mut self, input: &str) -> Result<(), ListViewError> {
        let values = self.select(input)?;
        tracing::debug!(input, selected = values.len(), "selection resolved");
        if let Some(callback) = self.on_select.as_mut() {
            callback(values);
        }
        Ok(())
    }

    /// Applies `f` to every item picked by `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::IndexOutOfRange`] if a row does not exist in
    /// the selection scope; no item is touched in that case.
    pub fn update_selected(
        &mut self,
        input: &str,
        mut f: impl FnMut(&mut T),
    ) -> Result<usize, ListViewError> {
        let indices = self.selected_indices(input)?;
        let mut touched: usize = 0;
        for i in indices {
            if let Some(item) = self.items.get_mut(i) {
                f(item);
                touched = touched.saturating_add(1);
            }
        }
        Ok(touched)
    }
}
