//! Game configuration, optionally supplied as inline JSON in the host page.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Id of the `<script type="application/json">` element read at startup.
pub const CONFIG_ELEMENT_ID: &str = "flag-match-config";

pub const DEFAULT_IDENTITIES: [&str; 8] = ["au", "br", "ca", "de", "fr", "gb", "in", "jp"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Flag codes; each one becomes a pair of cards.
    pub identities: Vec<String>,
    pub columns: u32,
    /// Delay before a mismatched pair flips face-down again.
    pub flip_back_delay_ms: u32,
    pub asset_dir: String,
    pub asset_ext: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            identities: DEFAULT_IDENTITIES.iter().map(|s| s.to_string()).collect(),
            columns: 4,
            flip_back_delay_ms: 1000,
            asset_dir: "assets/flags".to_string(),
            asset_ext: "png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON could not be parsed into a config.
    Parse(String),
    NoIdentities,
    DuplicateIdentity { identity: String },
    EmptyIdentity,
    ZeroColumns,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid config json: {}", msg),
            ConfigError::NoIdentities => write!(f, "config lists no identities"),
            ConfigError::DuplicateIdentity { identity } => {
                write!(f, "identity '{}' listed more than once", identity)
            }
            ConfigError::EmptyIdentity => write!(f, "identity codes must not be empty"),
            ConfigError::ZeroColumns => write!(f, "columns must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl GameConfig {
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let cfg: GameConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.identities.is_empty() {
            return Err(ConfigError::NoIdentities);
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        let mut seen = HashSet::new();
        for id in &self.identities {
            if id.trim().is_empty() {
                return Err(ConfigError::EmptyIdentity);
            }
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::DuplicateIdentity {
                    identity: id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn pair_count(&self) -> usize {
        self.identities.len()
    }

    /// Image URL for a flag code, by convention `{dir}/{identity}.{ext}`.
    pub fn asset_path(&self, identity: &str) -> String {
        format!(
            "{}/{}.{}",
            self.asset_dir.trim_end_matches('/'),
            identity,
            self.asset_ext
        )
    }

    /// Reads the inline config element from the current document. Falls back
    /// to defaults when the element is absent or invalid.
    pub fn load_from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            log::debug!("no #{} element, using default config", CONFIG_ELEMENT_ID);
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                log::info!(
                    "loaded config: {} pairs, {} columns",
                    cfg.pair_count(),
                    cfg.columns
                );
                cfg
            }
            Err(e) => {
                log::warn!("{}; falling back to default config", e);
                Self::default()
            }
        }
    }
}
