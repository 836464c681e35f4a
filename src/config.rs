use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: Logging,
    pub policy: Policy,
    pub extract: ExtractCfg,
    pub watch: WatchCfg,
    pub clipboard: ClipboardCfg,
    pub display: DisplayCfg,
}

impl Config {
    pub fn load(path_opt: Option<&Path>) -> Result<Self> {
        let default_path = Path::new("capx.toml");
        let path = if let Some(p) = path_opt {
            Some(p)
        } else if default_path.exists() {
            Some(default_path)
        } else {
            None
        };

        let Some(path) = path else {
            return Ok(Config::default());
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed reading config file: {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn to_toml_pretty(&self) -> Result<String> {
        let s = toml::to_string_pretty(self).context("failed serializing config as TOML")?;
        Ok(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub level: String,
    pub format: String,
    pub debug_segment_samples: usize,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            debug_segment_samples: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub normalize_whitespace: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            normalize_whitespace: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractCfg {
    pub default_start: String,
    /// End bound used when `--end` is omitted and the source has no segments.
    pub fallback_end: String,
}

impl Default for ExtractCfg {
    fn default() -> Self {
        Self {
            default_start: "0:00".to_string(),
            fallback_end: "10:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchCfg {
    pub poll_interval_ms: u64,
    /// 0 waits forever.
    pub max_attempts: u32,
}

impl WatchCfg {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for WatchCfg {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            max_attempts: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardCfg {
    pub enabled: bool,
    /// Tried in order; the first command that exits 0 wins.
    pub commands: Vec<Vec<String>>,
}

impl Default for ClipboardCfg {
    fn default() -> Self {
        let cmd = |parts: &[&str]| parts.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            enabled: true,
            commands: vec![
                cmd(&["pbcopy"]),
                cmd(&["wl-copy"]),
                cmd(&["xclip", "-selection", "clipboard"]),
                cmd(&["xsel", "--clipboard", "--input"]),
                cmd(&["clip"]),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayCfg {
    /// 0 disables wrapping.
    pub wrap_width: usize,
}

impl Default for DisplayCfg {
    fn default() -> Self {
        Self { wrap_width: 80 }
    }
}

pub fn init_tracing(logging: &Logging, cli_override_level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = cli_override_level.unwrap_or(logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let is_json = logging.format.to_lowercase() == "json";

    // stdout carries the extracted text; logs go to stderr.
    if is_json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .event_format(fmt::format().json())
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .pretty()
            .init();
    }

    tracing::debug!(
        level = level,
        format = logging.format.as_str(),
        "logging initialized"
    );

    Ok(())
}
