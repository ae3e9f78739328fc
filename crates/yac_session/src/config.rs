use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Script search path handed to the engine at bootstrap. `None` means
    /// default discovery through the session's
    /// [`ScriptLocator`](crate::ScriptLocator).
    pub scripts_dir: Option<PathBuf>,
    /// Initialization script loaded once per engine instance.
    pub bootstrap_script: String,
    /// Printer restored after every evaluation, when set.
    ///
    /// Older callers expect a non-standard printer to stay active between
    /// calls, so the session evaluates in the standard mode and puts this
    /// printer back afterwards. `None` disables the toggle entirely.
    pub compat_printer: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scripts_dir: None,
            bootstrap_script: "yacasinit.ys".to_string(),
            compat_printer: Some("OMForm".to_string()),
        }
    }
}

impl SessionConfig {
    /// Load from a TOML file, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("error parsing {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())
    }
}
