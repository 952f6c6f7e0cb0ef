//! `compatlint.toml`: default input locations.
//!
//! ```toml
//! data = "."
//! browsers = "browsers"
//! specs = "node_modules/web-specs/index.json"
//! ```
//!
//! Relative paths resolve against the directory holding the file.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "compatlint.toml";
pub const DEFAULT_DATA_PATH: &str = ".";
pub const DEFAULT_BROWSERS_PATH: &str = "browsers";
pub const DEFAULT_SPECS_PATH: &str = "node_modules/web-specs/index.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default)]
    pub data: Option<PathBuf>,
    #[serde(default)]
    pub browsers: Option<PathBuf>,
    #[serde(default)]
    pub specs: Option<PathBuf>,
}

impl LintConfig {
    pub fn parse(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// Load `path`; a missing file yields the empty config.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
        let config = Self::parse(&text).map_err(|e| format!("{}: {e}", path.display()))?;
        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.rebased(base))
    }

    fn rebased(self, base: &Path) -> Self {
        let rebase = |p: Option<PathBuf>| p.map(|p| if p.is_absolute() { p } else { base.join(p) });
        Self {
            data: rebase(self.data),
            browsers: rebase(self.browsers),
            specs: rebase(self.specs),
        }
    }
}

/// Input locations after applying CLI > config file > built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub data: PathBuf,
    pub browsers: PathBuf,
    pub specs: PathBuf,
}

pub fn resolve_inputs(
    config: LintConfig,
    data: Option<String>,
    browsers: Option<String>,
    specs: Option<String>,
) -> ResolvedInputs {
    let pick = |arg: Option<String>, configured: Option<PathBuf>, default: &str| {
        arg.map(PathBuf::from)
            .or(configured)
            .unwrap_or_else(|| PathBuf::from(default))
    };
    ResolvedInputs {
        data: pick(data, config.data, DEFAULT_DATA_PATH),
        browsers: pick(browsers, config.browsers, DEFAULT_BROWSERS_PATH),
        specs: pick(specs, config.specs, DEFAULT_SPECS_PATH),
    }
}
