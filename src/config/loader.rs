use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{DashboardConfig, DEFAULT_CONFIG_TOML};
use super::validation::validate_config;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".turnos.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<DashboardConfig, String> {
    let config = toml::from_str::<DashboardConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    validate_config(&config)?;
    Ok(config)
}

/// Try loading config from a specific path; problems are logged, not raised
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<DashboardConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking ancestors
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<user config dir>/turnos/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("turnos").join("config.toml"))
}

/// Candidate config files in lookup order, starting from `start`.
pub fn candidate_paths(start: PathBuf) -> Vec<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .collect()
}

/// Search from `start` upwards, then the user config directory.
pub fn load_config_from(start: PathBuf) -> DashboardConfig {
    candidate_paths(start)
        .iter()
        .find_map(|path| try_load_config_from_path(path))
        .unwrap_or_else(|| {
            tracing::debug!("No config found. Using default config.");
            DashboardConfig::default()
        })
}

pub fn load_config() -> DashboardConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            DashboardConfig::default()
        }
    }
}

/// Load a config passed explicitly; any problem is an error.
pub fn load_config_file(path: &Path) -> Result<DashboardConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::config_at(format!("cannot read {}: {}", path.display(), e), path))?;
    parse_and_validate_config(&contents).map_err(|message| Error::config_at(message, path))
}

/// Write the default config file into `dir`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(Error::config_at(
            "Configuration file already exists. Use --force to overwrite.",
            &path,
        ));
    }
    fs::write(&path, DEFAULT_CONFIG_TOML)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_stops_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let err = parse_and_validate_config(indoc! {"
            [display]
            turnos_page_size = 0
        "})
        .unwrap_err();
        assert!(err.contains("display.turnos_page_size"));
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [endpoints]
            turnos_url = "https://example.org/turnos"

            [display]
            top_n = 5
        "#})
        .unwrap();
        assert_eq!(config.display.top_n, 5);
        assert_eq!(config.display.turnos_page_size, 50);
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.endpoints.views_url.is_none());
    }

    #[test]
    fn test_found_in_ancestor_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[display]\nview_page_size = 25\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.display.view_page_size, 25);
    }

    #[test]
    fn test_explicit_invalid_file_is_an_error() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("custom.toml");
        fs::write(&path, "[http]\ntimeout_secs = \"soon\"\n").unwrap();
        assert!(matches!(
            load_config_file(&path),
            Err(Error::Config { path: Some(_), .. })
        ));
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let root = TempDir::new().unwrap();
        let path = write_default_config(root.path(), false).unwrap();
        assert!(path.exists());
        assert!(write_default_config(root.path(), false).is_err());
        assert!(write_default_config(root.path(), true).is_ok());
        assert_eq!(load_config_file(&path).unwrap(), DashboardConfig::default());
    }
}
