use anyhow::Context;
use home::home_dir;
use std::path::{Path, PathBuf};

use crate::{constant, TimelineError};

/// What to do with a post that is longer than `max_post_len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the first `max_post_len` characters.
    #[default]
    Truncate,
    /// Refuse the post.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TimelineConfig {
    /// Maximum number of posts the timeline holds.
    pub capacity: usize,
    /// Maximum length of a post, in characters.
    pub max_post_len: usize,
    pub overflow: OverflowPolicy,
    /// Start with a few posts already on the timeline.
    pub seed: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            capacity: constant::CAPACITY,
            max_post_len: constant::MAX_POST_LEN,
            overflow: OverflowPolicy::default(),
            seed: true,
        }
    }
}

impl TimelineConfig {
    /// Load the config from `path` if given. Otherwise, the file named by
    /// `$TIMELINE_CONF` is used, then `~/.timeline/timeline.toml`. When none
    /// of them exist the defaults are returned.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };
        match path {
            Some(path) => Self::from_file(&path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a toml config file. Keys not present keep their default.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let buf = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&buf)
            .with_context(|| format!("Unable to parse config file {}", path.display()))?;
        config.validate()?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.capacity == 0 {
            return Err(TimelineError::config_error("capacity must be at least 1".into()));
        }
        if self.max_post_len == 0 {
            return Err(TimelineError::config_error(
                "max_post_len must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(constant::CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let path = home_dir()?
        .join(constant::CONFIG_DIR)
        .join(constant::CONFIG_FILE);
    path.exists().then_some(path)
}
