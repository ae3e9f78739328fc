//! Shared test helpers for the session contract tests.
//!
//! `ScriptedFactory` spawns programmable engine doubles: canned results, side
//! effects and errors per expression, plus a shared transcript of every
//! directive the session submitted, so tests can assert on wire-level
//! behaviour. Usage:
//!
//! ```ignore
//! mod test_utils;
//! use test_utils::*;
//! ```

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use yac_session::{Engine, EngineFactory, ScriptLocator, SideEffectSink};

/// Canned outcome for one expression.
#[derive(Clone, Default)]
pub struct Canned {
    pub result: String,
    pub side_effects: String,
    pub error: Option<String>,
}

#[derive(Default)]
struct Shared {
    transcript: Mutex<Vec<String>>,
    spawn_count: Mutex<usize>,
    fail_first_bootstrap: Mutex<Option<String>>,
}

/// Factory for scripted engines. Clones share the transcript and spawn
/// counter, so keep a clone around as a probe before handing the factory to
/// the session.
#[derive(Clone, Default)]
pub struct ScriptedFactory {
    responses: HashMap<String, Canned>,
    fail_directives: Vec<(String, String)>,
    shared: Arc<Shared>,
}

impl ScriptedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned result for an exact expression, with no side effects.
    pub fn on(mut self, expr: &str, result: &str) -> Self {
        self.responses.insert(
            expr.to_string(),
            Canned {
                result: result.to_string(),
                ..Canned::default()
            },
        );
        self
    }

    /// Canned result plus text the engine prints while evaluating.
    pub fn on_full(mut self, expr: &str, result: &str, side_effects: &str) -> Self {
        self.responses.insert(
            expr.to_string(),
            Canned {
                result: result.to_string(),
                side_effects: side_effects.to_string(),
                error: None,
            },
        );
        self
    }

    /// The given expression flips the engine into an error state.
    pub fn fail_on(mut self, expr: &str, message: &str) -> Self {
        self.responses.insert(
            expr.to_string(),
            Canned {
                error: Some(message.to_string()),
                ..Canned::default()
            },
        );
        self
    }

    /// Any directive containing `pattern` flips the engine into an error
    /// state.
    pub fn fail_directive(mut self, pattern: &str, message: &str) -> Self {
        self.fail_directives
            .push((pattern.to_string(), message.to_string()));
        self
    }

    /// Only the first spawned engine fails its `Load(...)` bootstrap step.
    pub fn fail_first_bootstrap(self, message: &str) -> Self {
        *self.shared.fail_first_bootstrap.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Everything any spawned engine was asked to evaluate, in order.
    pub fn transcript(&self) -> Vec<String> {
        self.shared.transcript.lock().unwrap().clone()
    }

    /// How many engine instances have been constructed.
    pub fn spawn_count(&self) -> usize {
        *self.shared.spawn_count.lock().unwrap()
    }
}

impl EngineFactory for ScriptedFactory {
    fn spawn(&self, sink: SideEffectSink) -> Box<dyn Engine> {
        *self.shared.spawn_count.lock().unwrap() += 1;
        let bootstrap_failure = self.shared.fail_first_bootstrap.lock().unwrap().take();
        Box::new(ScriptedEngine {
            responses: self.responses.clone(),
            fail_directives: self.fail_directives.clone(),
            shared: Arc::clone(&self.shared),
            sink,
            bootstrap_failure,
            error: None,
            result: String::new(),
        })
    }
}

pub struct ScriptedEngine {
    responses: HashMap<String, Canned>,
    fail_directives: Vec<(String, String)>,
    shared: Arc<Shared>,
    sink: SideEffectSink,
    bootstrap_failure: Option<String>,
    error: Option<String>,
    result: String,
}

impl Engine for ScriptedEngine {
    fn evaluate(&mut self, command: &str) {
        self.shared
            .transcript
            .lock()
            .unwrap()
            .push(command.to_string());
        self.error = None;

        if let Some(message) = &self.bootstrap_failure {
            if command.starts_with("Load(") {
                self.error = Some(message.clone());
                return;
            }
        }

        if let Some((_, message)) = self
            .fail_directives
            .iter()
            .find(|(pattern, _)| command.contains(pattern.as_str()))
        {
            self.error = Some(message.clone());
            return;
        }

        if let Some(canned) = self.responses.get(command) {
            self.sink.push_str(&canned.side_effects);
            match &canned.error {
                Some(message) => self.error = Some(message.clone()),
                None => self.result = canned.result.clone(),
            }
            return;
        }

        // Unscripted directives and expressions succeed silently.
        self.result = "True".to_string();
    }

    fn is_error(&self) -> bool {
        self.error.is_some()
    }

    fn error(&self) -> String {
        self.error.clone().unwrap_or_default()
    }

    fn result(&self) -> String {
        self.result.clone()
    }
}

/// Locator that never finds an installation; keeps transcripts independent of
/// the host filesystem and environment.
pub struct NoScripts;

impl ScriptLocator for NoScripts {
    fn locate(&self) -> Option<PathBuf> {
        None
    }
}

/// Locator pinned to a fixed directory.
pub struct FixedLocator(pub &'static str);

impl ScriptLocator for FixedLocator {
    fn locate(&self) -> Option<PathBuf> {
        Some(PathBuf::from(self.0))
    }
}
