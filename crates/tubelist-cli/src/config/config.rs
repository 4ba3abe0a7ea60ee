//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tubelist::{ColumnSpec, ItemKind, Palette, SelectionScope, default_columns};

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Fallback geometry for undetectable terminals.
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// Rendering and selection options.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Column layouts per item variant.
    #[serde(default)]
    pub columns: ColumnsConfig,
}

/// Geometry used when stdout is not a terminal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Line width in columns.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Items per page.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

const fn default_width() -> usize {
    80
}

const fn default_max_results() -> usize {
    19
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            max_results: default_max_results(),
        }
    }
}

/// Display options.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Emit ANSI styles for the header and alternating rows.
    #[serde(default = "default_color")]
    pub color: bool,
    /// What typed row numbers refer to.
    #[serde(default)]
    pub selection_scope: SelectionScope,
}

const fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            selection_scope: SelectionScope::default(),
        }
    }
}

impl DisplayConfig {
    /// Palette for the output stream: styled only when `color` is on and
    /// the output is a terminal.
    #[must_use]
    pub fn palette(&self, is_tty: bool) -> Palette {
        if self.color && is_tty {
            Palette::ansi()
        } else {
            Palette::plain()
        }
    }
}

/// Optional column overrides; `None` uses the built-in layout.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ColumnsConfig {
    /// Columns for live-stream lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_stream: Option<Vec<ColumnSpec>>,
    /// Columns for song-title lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_title: Option<Vec<ColumnSpec>>,
    /// Columns for channel lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Vec<ColumnSpec>>,
}

impl ColumnsConfig {
    /// Column specs for `kind`, falling back to the defaults.
    #[must_use]
    pub fn for_kind(&self, kind: ItemKind) -> Vec<ColumnSpec> {
        let configured = match kind {
            ItemKind::LiveStream => &self.live_stream,
            ItemKind::SongTitle => &self.song_title,
            ItemKind::User => &self.user,
        };
        configured
            .clone()
            .unwrap_or_else(|| default_columns(kind))
    }
}

impl AppConfig {
    /// Default settings with every column layout spelled out, for editing.
    #[must_use]
    pub fn template() -> Self {
        Self {
            columns: ColumnsConfig {
                live_stream: Some(default_columns(ItemKind::LiveStream)),
                song_title: Some(default_columns(ItemKind::SongTitle)),
                user: Some(default_columns(ItemKind::User)),
            },
            ..Self::default()
        }
    }

    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tubelist::ColumnSize;

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert_eq!(config.terminal.width, 80);
        assert_eq!(config.terminal.max_results, 19);
        assert!(config.display.color);
        assert_eq!(config.display.selection_scope, SelectionScope::Page);
        assert_eq!(
            config.columns.for_kind(ItemKind::User),
            default_columns(ItemKind::User)
        );
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let path = Path::new("/tmp/tubelist_test_nonexistent_config.toml");

        // Act
        let config = AppConfig::load(path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            terminal: TerminalConfig {
                width: 100,
                max_results: 5,
            },
            display: DisplayConfig {
                color: false,
                selection_scope: SelectionScope::Collection,
            },
            columns: ColumnsConfig {
                song_title: Some(vec![
                    ColumnSpec::new("idx", ColumnSize::Fixed(3), "#"),
                    ColumnSpec::new("title", ColumnSize::Remaining, "Song"),
                ]),
                ..ColumnsConfig::default()
            },
        };

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[display]
selection_scope = "collection"

[[columns.live_stream]]
name = "title"
size = "remaining"
heading = "Stream"

[[columns.live_stream]]
name = "length"
size = "length"
heading = "Length"
"#,
        )
        .unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.terminal, TerminalConfig::default());
        assert!(config.display.color);
        assert_eq!(config.display.selection_scope, SelectionScope::Collection);
        assert_eq!(
            config.columns.for_kind(ItemKind::LiveStream),
            vec![
                ColumnSpec::new("title", ColumnSize::Remaining, "Stream"),
                ColumnSpec::new("length", ColumnSize::Length, "Length"),
            ]
        );
        assert_eq!(
            config.columns.for_kind(ItemKind::SongTitle),
            default_columns(ItemKind::SongTitle)
        );
    }

    #[test]
    fn test_load_rejects_unknown_size_keyword() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[[columns.user]]\nname = \"name\"\nsize = \"wide\"\nheading = \"Name\"\n",
        )
        .unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_template_matches_defaults() {
        // Arrange & Act
        let template = AppConfig::template();

        // Assert
        for kind in [ItemKind::LiveStream, ItemKind::SongTitle, ItemKind::User] {
            assert_eq!(
                template.columns.for_kind(kind),
                AppConfig::default().columns.for_kind(kind)
            );
        }
        assert_eq!(template.terminal, TerminalConfig::default());
    }

    #[test]
    fn test_palette_follows_color_setting() {
        // Arrange
        let plain = DisplayConfig {
            color: false,
            selection_scope: SelectionScope::Page,
        };

        // Act & Assert
        assert_eq!(plain.palette(true), Palette::plain());
        assert_eq!(DisplayConfig::default().palette(true), Palette::ansi());
        assert_eq!(DisplayConfig::default().palette(false), Palette::plain());
    }
}
