use std::path::Path;

use serde::{Deserialize, Serialize};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("../resources/default_prefs.yaml");

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Preferences {
    /// Number of moves in a generated scramble.
    pub scramble_length: usize,
    /// Whether to indent JSON output.
    pub pretty_json: bool,
    /// Whether solver output includes one entry per solved piece.
    pub show_partitions: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            scramble_length: cubepuzzle::scramble::SCRAMBLE_LENGTH,
            pretty_json: true,
            show_partitions: true,
        }
    }
}

impl Preferences {
    /// Loads the built-in defaults, overridden by `user_file` if there is
    /// one. If loading fails, the defaults are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = user_file {
            config = config.add_source(config::File::from(path).required(true));
        }

        config
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }
}
