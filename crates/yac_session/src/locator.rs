//! Default discovery of the engine's script directory.
//!
//! Upstream asks its host environment for the installed resource bundle; here
//! discovery is an environment variable first, then the conventional install
//! prefixes. Coming up empty is not an error: the engine is simply given no
//! search path, and `Load` falls back to whatever the engine resolves itself.

use std::env;
use std::path::PathBuf;

/// Environment variable consulted first during default discovery.
pub const SCRIPTS_ENV_VAR: &str = "YACAS_SCRIPTS";

const SYSTEM_PREFIXES: &[&str] = &["/usr/local/share/yacas", "/usr/share/yacas"];

/// Resolves the default script directory when the session has no explicit
/// path configured.
pub trait ScriptLocator {
    fn locate(&self) -> Option<PathBuf>;
}

/// Environment-first discovery: `YACAS_SCRIPTS`, then system install prefixes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocator;

impl ScriptLocator for SystemLocator {
    fn locate(&self) -> Option<PathBuf> {
        if let Some(dir) = env::var_os(SCRIPTS_ENV_VAR) {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir));
            }
        }
        SYSTEM_PREFIXES
            .iter()
            .map(|prefix| PathBuf::from(*prefix))
            .find(|p| p.is_dir())
    }
}
