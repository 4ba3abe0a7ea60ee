//! Terminal geometry as seen by the list view.

/// Rows reserved around the table (blank line, header, prompt, status).
const RESERVED_ROWS: usize = 4;
/// Page size cap for very tall terminals.
const MAX_PAGE_SIZE: usize = 50;
/// Terminals this short or shorter show one row per page.
const MIN_USABLE_HEIGHT: usize = 5;

/// Width, height and derived page size of the output terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Columns available to one table line.
    pub width: usize,
    /// Terminal rows.
    pub height: usize,
    /// Items shown per page.
    pub max_results: usize,
}

impl Geometry {
    /// Derives geometry from a detected terminal size.
    #[must_use]
    pub const fn from_terminal_size(width: usize, height: usize) -> Self {
        let max_results = if height <= MIN_USABLE_HEIGHT {
            1
        } else if height.saturating_sub(RESERVED_ROWS) > MAX_PAGE_SIZE {
            MAX_PAGE_SIZE
        } else {
            height.saturating_sub(RESERVED_ROWS)
        };
        Self {
            width,
            height,
            max_results,
        }
    }

    /// Geometry for an undetectable terminal: both values come from settings.
    #[must_use]
    pub const fn fixed(width: usize, max_results: usize) -> Self {
        let max_results = if max_results == 0 { 1 } else { max_results };
        Self {
            width,
            height: max_results.saturating_add(RESERVED_ROWS),
            max_results,
        }
    }
}

/// Supplies the current terminal geometry.
///
/// Queried at the start of every render, page computation and selection
/// so a resized terminal is picked up on the next call.
pub trait GeometrySource {
    /// Returns the geometry to lay out against right now.
    fn geometry(&self) -> Geometry;
}

impl GeometrySource for Geometry {
    fn geometry(&self) -> Geometry {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_terminal_size_reserves_rows() {
        assert_eq!(Geometry::from_terminal_size(80, 24).max_results, 20);
    }

    #[test]
    fn test_from_terminal_size_caps_tall_terminals() {
        assert_eq!(Geometry::from_terminal_size(80, 54).max_results, 50);
        assert_eq!(Geometry::from_terminal_size(80, 120).max_results, 50);
    }

    #[test]
    fn test_from_terminal_size_tiny_terminal() {
        assert_eq!(Geometry::from_terminal_size(80, 5).max_results, 1);
        assert_eq!(Geometry::from_terminal_size(80, 0).max_results, 1);
        assert_eq!(Geometry::from_terminal_size(80, 6).max_results, 2);
    }

    #[test]
    fn test_fixed() {
        // Arrange & Act
        let geometry = Geometry::fixed(100, 19);

        // Assert
        assert_eq!(geometry.width, 100);
        assert_eq!(geometry.height, 23);
        assert_eq!(geometry.max_results, 19);
        assert_eq!(Geometry::fixed(100, 0).max_results, 1);
    }
}
