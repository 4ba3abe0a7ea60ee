//! Config file location.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, bail};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";
/// Application directory under the XDG config base.
const APP_DIR: &str = "tubelist";

/// Resolves the config file path.
///
/// Lookup order:
/// 1. `{dir}/config.toml` when `--dir` is given.
/// 2. `$XDG_CONFIG_HOME/tubelist/config.toml` when that variable is set
///    to an absolute path.
/// 3. `$HOME/.config/tubelist/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is usable
/// (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    config_path_from(
        dir,
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

/// Applies the lookup order of [`resolve_config_path`] to explicit values.
fn config_path_from(
    dir: Option<&PathBuf>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    // XDG base directories must be absolute; relative values are ignored.
    let base = match xdg_config_home.map(PathBuf::from) {
        Some(xdg) if xdg.is_absolute() => xdg,
        _ => match home.filter(|h| !h.is_empty()) {
            Some(h) => PathBuf::from(h).join(".config"),
            None => bail!("neither XDG_CONFIG_HOME nor HOME is set"),
        },
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_dir_overrides_environment() {
        // Arrange
        let dir = PathBuf::from("/tmp/lists");

        // Act
        let path = config_path_from(
            Some(&dir),
            Some(OsString::from("/xdg")),
            Some(OsString::from("/home/u")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/lists/config.toml"));
    }

    #[test]
    fn test_xdg_config_home_preferred_over_home() {
        // Arrange & Act
        let path = config_path_from(
            None,
            Some(OsString::from("/xdg")),
            Some(OsString::from("/home/u")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/xdg/tubelist/config.toml"));
    }

    #[test]
    fn test_relative_xdg_config_home_ignored() {
        // Arrange & Act
        let path = config_path_from(
            None,
            Some(OsString::from("relative/conf")),
            Some(OsString::from("/home/u")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/u/.config/tubelist/config.toml"));
    }

    #[test]
    fn test_home_fallback() {
        // Arrange & Act
        let path = config_path_from(None, None, Some(OsString::from("/home/u"))).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/u/.config/tubelist/config.toml"));
    }

    #[test]
    fn test_no_base_directory_is_an_error() {
        // Arrange & Act
        let result = config_path_from(None, None, Some(OsString::new()));

        // Assert
        assert!(result.is_err());
    }
}
