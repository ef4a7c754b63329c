//! Configuration management module

use anyhow::{Context, Result};
use std::path::Path;

use crate::model::Config;
use crate::store::StoreOptions;
use crate::utils::path::normalize_path;

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);
    tracing::debug!(path = %path.display(), "loading configuration");
    Config::load_from(&path)
        .with_context(|| format!("Failed to load config file {}", path.display()))
}

/// Build store options, with `dir_override` taking precedence over the config
pub fn store_options(config: &Config, dir_override: Option<&str>) -> StoreOptions {
    let store = &config.store;
    let dir = normalize_path(dir_override.unwrap_or(&store.dir));
    StoreOptions {
        dir,
        prefix: store.prefix.clone(),
        suffix: store.suffix.clone(),
        indent: store.indent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_override_wins() {
        let config = Config::default();
        let options = store_options(&config, Some("/tmp/lang"));
        assert_eq!(options.dir, PathBuf::from("/tmp/lang"));
        assert_eq!(options.prefix, "stf.");
    }

    #[test]
    fn test_default_dir_is_relative_to_cwd() {
        let options = store_options(&Config::default(), None);
        assert!(options.dir.is_absolute());
        assert!(options.dir.ends_with("res/common/lang/translations"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\nprefix = \"app.\"\nindent = 4\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        let options = store_options(&config, None);
        assert_eq!(options.prefix, "app.");
        assert_eq!(options.suffix, ".json");
        assert_eq!(options.indent, 4);
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}
