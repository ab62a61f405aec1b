/// Split a comma-separated flag value, trimming entries and dropping empty ones.
#[must_use]
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',').map(str::trim).filter(|p| !p.is_empty()).map(str::to_string).collect()
}

pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::errors::DepGraphError;

    pub const DEFAULT_CONFIG_NAME: &str = "golist-depgraph.toml";

    /// Defaults for the command-line options; every key is optional.
    #[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        pub ignore_stdlib: Option<bool>,
        pub delve_goroot: Option<bool>,
        pub include_tests: Option<bool>,
        pub ignore_prefixes: Option<Vec<String>>,
        pub ignore_packages: Option<Vec<String>>,
        pub ignore_keywords: Option<Vec<String>>,
        pub only_prefixes: Option<Vec<String>>,
        pub tags: Option<Vec<String>>,
        pub max_depth: Option<usize>,
        pub trim_prefix: Option<String>,
        /// Go toolchain binary.
        pub go: Option<String>,
    }

    /// Load an explicitly requested config file.
    ///
    /// # Errors
    /// Returns `DepGraphError::Config` if the file cannot be read or parsed.
    pub fn load_config_at(path: &Path) -> Result<Config, DepGraphError> {
        let data = fs::read_to_string(path)
            .map_err(|e| DepGraphError::Config { path: path.to_path_buf(), message: e.to_string() })?;
        toml::from_str::<Config>(&data)
            .map_err(|e| DepGraphError::Config { path: path.to_path_buf(), message: e.to_string() })
    }

    #[must_use]
    pub fn default_config_path(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_CONFIG_NAME)
    }

    /// Look for `golist-depgraph.toml` in `dir`. A missing file yields `None`; a malformed
    /// one is reported and skipped.
    #[must_use]
    pub fn load_config_near(dir: &Path) -> Option<Config> {
        let path = default_config_path(dir);
        if !path.exists() {
            return None;
        }
        match load_config_at(&path) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::warn!("ignoring config: {e}");
                None
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_drops_empty_entries() {
        assert_eq!(split_list("a, b,,c,"), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }
}
