use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn default_timeout_secs() -> u64 {
    salesdesk_config::DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            base_url: salesdesk_config::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl ConsoleSettings {
    /// Stored base URL unless the environment overrides it.
    pub fn effective_base_url(&self) -> String {
        match std::env::var(salesdesk_config::BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.base_url.clone(),
        }
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(salesdesk_config::clamp_timeout_secs(
            self.request_timeout_secs,
        ))
    }
}

const QUALIFIER: &str = "com";
const ORG: &str = "salesdesk";
const APP: &str = "console";

pub struct FilePersistence {
    dir: Option<PathBuf>,
}

impl Default for FilePersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePersistence {
    /// Settings live in the platform config directory.
    pub fn new() -> Self {
        Self { dir: None }
    }

    /// Settings live in `dir` instead of the platform config directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    fn config_dir(&self) -> Result<PathBuf> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from(QUALIFIER, ORG, APP)
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
                .config_dir()
                .to_path_buf(),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(dir)
    }

    pub fn settings_path(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("settings.json"))
    }

    pub fn load_settings(&self) -> Result<ConsoleSettings> {
        let path = self.settings_path()?;
        if !path.exists() {
            return Ok(ConsoleSettings::default());
        }
        let content = fs::read_to_string(&path).context("Failed to read settings")?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &ConsoleSettings) -> Result<()> {
        let path = self.settings_path()?;
        let json = serde_json::to_string_pretty(settings)?;
        atomic_write(&path, json.as_bytes()).context("Failed to write settings")?;
        Ok(())
    }
}

fn atomic_write(path: &std::path::Path, contents: &[u8]) -> Result<()> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file {}", tmp_path.display()))?;
    file.write_all(contents)
        .with_context(|| format!("Failed to write temp file {}", tmp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync temp file {}", tmp_path.display()))?;
    drop(file);

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename temp file {} to {}",
            tmp_path.display(),
            path.display()
        )
    })
}
