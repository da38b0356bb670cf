//! Harness configuration file.
//!
//! ```toml
//! prompt = "> "
//!
//! [entries]
//! greeting = "hello"
//! ```
//!
//! `entries` seed the scratch registry in file order.

use std::path::{Path, PathBuf};

// Provides the serde impls for `EntryMap`.
use indexmap as _;
use modkit_primitives::Coalesce;
use modkit_registry::EntryMap;
use serde::Deserialize;

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read config at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config at {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
	/// Prompt printed before each command. Blank falls back to [`DEFAULT_PROMPT`].
	pub prompt: String,
	/// Entries registered before the first command.
	pub entries: EntryMap<String, String>,
}

impl Default for ReplConfig {
	fn default() -> Self {
		Self {
			prompt: DEFAULT_PROMPT.to_string(),
			entries: EntryMap::default(),
		}
	}
}

impl ReplConfig {
	/// Reads and parses the config file at `path`.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::parse(&source).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), entries = config.entries.len(), "loaded config");
		Ok(config)
	}

	/// Parses config text.
	pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
		let mut config: Self = toml::from_str(source)?;
		config.prompt = config.prompt.coalesce(DEFAULT_PROMPT.to_string());
		Ok(config)
	}
}
