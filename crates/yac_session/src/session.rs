//! Engine lifecycle and the per-expression evaluation gateway.

use std::path::Path;

use tracing::{debug, info};
use yac_engine::{directive, Engine, EngineFactory, SideEffectSink};

use crate::{ScriptLocator, SessionConfig, SessionError, SystemLocator};

/// Response to one evaluation: side effects first, result second. The order
/// is part of the contract inherited from the original two-element response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Everything the engine printed while evaluating this expression.
    pub side_effects: String,
    /// The engine's textual result.
    pub result: String,
}

impl From<Evaluation> for (String, String) {
    fn from(eval: Evaluation) -> Self {
        (eval.side_effects, eval.result)
    }
}

/// One engine session: owns at most one live engine instance plus the shared
/// side-effect sink, and routes every evaluation through them.
///
/// Sessions are independent of each other; construct one per caller. Within a
/// session, one evaluation is in flight at a time (`&mut self`), and there is
/// no cancellation or timeout: a call runs to whatever completion the engine
/// reaches.
pub struct Session {
    factory: Box<dyn EngineFactory>,
    locator: Box<dyn ScriptLocator>,
    config: SessionConfig,
    sink: SideEffectSink,
    engine: Option<Box<dyn Engine>>,
}

impl Session {
    /// Uninitialized session with the default configuration; no engine is
    /// spawned until the first evaluation or an explicit initialization.
    pub fn new(factory: impl EngineFactory + 'static) -> Self {
        Self::with_config(factory, SessionConfig::default())
    }

    pub fn with_config(factory: impl EngineFactory + 'static, config: SessionConfig) -> Self {
        Self {
            factory: Box::new(factory),
            locator: Box::new(SystemLocator),
            config,
            sink: SideEffectSink::new(),
            engine: None,
        }
    }

    /// Replace the default script-directory discovery.
    pub fn with_locator(mut self, locator: impl ScriptLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether an engine instance is currently live.
    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    /// Idempotent bootstrap: spawns and initializes an engine unless one is
    /// already live.
    pub fn ensure_initialized(&mut self) -> Result<(), SessionError> {
        if self.engine.is_none() {
            self.engine = Some(self.bootstrap(None)?);
        }
        Ok(())
    }

    /// Unconditionally rebuilds the engine, replacing any live instance.
    ///
    /// Intended for development and diagnostics, e.g. pointing the session at
    /// an alternate script directory without restarting the host. An empty or
    /// absent path means default discovery. The path is recorded in the
    /// session config, so it stays in effect for later re-initialization.
    pub fn force_initialize(&mut self, path: Option<&Path>) -> Result<(), SessionError> {
        info!("initialising yacas engine");
        // Drop the old instance first so a failed rebuild leaves no stale one.
        self.engine = None;
        let override_path = path.filter(|p| !p.as_os_str().is_empty());
        self.engine = Some(self.bootstrap(override_path)?);
        info!("yacas engine initialised");
        Ok(())
    }

    /// Evaluates one expression, lazily bootstrapping the engine on first use.
    ///
    /// The expression is opaque to the session: it is submitted verbatim, and
    /// the engine is solely responsible for parsing it. The side-effect sink
    /// is cleared first, so the response only carries output produced by this
    /// call. An evaluation error aborts this call only; the engine instance
    /// survives and remains usable.
    pub fn evaluate(&mut self, expr: &str) -> Result<Evaluation, SessionError> {
        let mut engine = match self.engine.take() {
            Some(engine) => engine,
            None => self.bootstrap(None)?,
        };
        let outcome = self.gateway(engine.as_mut(), expr);
        self.engine = Some(engine);
        outcome
    }

    fn gateway(&self, engine: &mut dyn Engine, expr: &str) -> Result<Evaluation, SessionError> {
        debug!(%expr, "evaluating yacas expression");
        self.sink.clear();

        // A previous call may have left the compatibility printer active;
        // evaluate in the standard mode.
        if self.config.compat_printer.is_some() {
            engine.evaluate(&directive::pretty_printer_reset());
        }

        engine.evaluate(expr);

        if engine.is_error() {
            let detail = engine.error();
            self.restore_printer(engine);
            return Err(SessionError::Evaluation(detail));
        }

        let side_effects = self.sink.snapshot();
        let result = engine.result();
        self.restore_printer(engine);

        Ok(Evaluation { side_effects, result })
    }

    // Best effort: older callers expect the non-standard printer to stay
    // active between calls.
    fn restore_printer(&self, engine: &mut dyn Engine) {
        if let Some(printer) = &self.config.compat_printer {
            engine.evaluate(&directive::pretty_printer_set(printer));
        }
    }

    fn bootstrap(&mut self, override_path: Option<&Path>) -> Result<Box<dyn Engine>, SessionError> {
        self.sink.clear();
        let mut engine = self.factory.spawn(self.sink.clone());

        let scripts_dir = match override_path {
            Some(dir) => {
                info!(path = %dir.display(), "searching for yacas scripts at override path");
                self.config.scripts_dir = Some(dir.to_path_buf());
                Some(dir.to_path_buf())
            }
            None => self
                .config
                .scripts_dir
                .clone()
                .or_else(|| self.locator.locate()),
        };

        if let Some(dir) = scripts_dir.as_deref().map(normalize_scripts_dir) {
            if !dir.is_empty() {
                engine.evaluate(&directive::default_directory(&dir));
            }
        }

        if !engine.is_error() {
            engine.evaluate(&directive::load(&self.config.bootstrap_script));
        }

        if !engine.is_error() {
            if let Some(printer) = &self.config.compat_printer {
                engine.evaluate(&directive::pretty_printer_set(printer));
            }
        }

        if engine.is_error() {
            // The partially built instance is discarded; the next call
            // retries from scratch.
            return Err(SessionError::Initialization(engine.error()));
        }

        debug!(script = %self.config.bootstrap_script, "yacas bootstrap complete");
        Ok(engine)
    }
}

/// Engine paths use `/` regardless of host platform; a trailing separator is
/// appended only when absent, so `/some/dir` and `/some/dir/` configure the
/// engine identically.
fn normalize_scripts_dir(dir: &Path) -> String {
    let mut path = dir.to_string_lossy().into_owned();
    if !path.is_empty() && !path.ends_with('/') {
        path.push('/');
    }
    path
}
