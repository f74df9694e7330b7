use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Settings for the recommender and the CLI around it.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to change:
///
/// ```json
/// { "data_file": "data/imdb_top_1000.csv", "top_n": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Catalog CSV to load at startup
    pub data_file: PathBuf,
    /// How many movies "recommend" returns
    pub top_n: NonZeroUsize,
    /// How many movies "surprise" returns
    pub surprise_count: NonZeroUsize,
}

const DEFAULT_COUNT: NonZeroUsize = NonZeroUsize::new(5).unwrap();

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            top_n: DEFAULT_COUNT,
            surprise_count: DEFAULT_COUNT,
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("imdb_top_1000.csv")
}

impl RecommenderConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RecommenderConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RecommenderConfig::default();
        assert_eq!(config.data_file, PathBuf::from("imdb_top_1000.csv"));
        assert_eq!(config.top_n.get(), 5);
        assert_eq!(config.surprise_count.get(), 5);
    }

    #[test]
    fn test_partial_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "top_n": 10 }}"#).unwrap();

        let config = RecommenderConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.top_n.get(), 10);
        assert_eq!(config.surprise_count.get(), 5);
        assert_eq!(config.data_file, PathBuf::from("imdb_top_1000.csv"));
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "top_n = 10").unwrap();

        assert!(RecommenderConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_zero_counts_rejected() {
        for body in [r#"{ "top_n": 0 }"#, r#"{ "surprise_count": 0 }"#] {
            let mut file = NamedTempFile::new().unwrap();
            write!(file, "{}", body).unwrap();
            assert!(RecommenderConfig::load_from_file(file.path()).is_err());
        }
    }

    #[test]
    fn test_missing_config_file() {
        assert!(RecommenderConfig::load_from_file(Path::new("no/such/config.json")).is_err());
    }
}
