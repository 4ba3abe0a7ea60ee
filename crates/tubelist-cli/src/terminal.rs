//! Terminal size detection backed by `crossterm`.

use crossterm::tty::IsTty;
use tubelist::{Geometry, GeometrySource};

/// Reads the size of the terminal attached to stdout on every query.
///
/// Falls back to a configured geometry when stdout is not a terminal or
/// its size cannot be read.
#[derive(Debug, Clone, Copy)]
pub struct TerminalGeometry {
    fallback: Geometry,
}

impl TerminalGeometry {
    /// Creates a source using `fallback` for undetectable terminals.
    #[must_use]
    pub const fn new(fallback: Geometry) -> Self {
        Self { fallback }
    }
}

/// Picks the geometry for a detected `(columns, rows)` size, if any.
fn geometry_for(size: Option<(u16, u16)>, fallback: Geometry) -> Geometry {
    size.map_or(fallback, |(width, height)| {
        Geometry::from_terminal_size(usize::from(width), usize::from(height))
    })
}

/// Whether stdout is attached to a terminal.
#[must_use]
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_tty()
}

impl GeometrySource for TerminalGeometry {
    fn geometry(&self) -> Geometry {
        let size = if stdout_is_tty() {
            crossterm::terminal::size()
                .inspect_err(|e| tracing::debug!(error = %e, "terminal size unavailable"))
                .ok()
        } else {
            None
        };
        geometry_for(size, self.fallback)
    }
}
