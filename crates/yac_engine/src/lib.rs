//! Engine-facing boundary for the yacas session bridge.
//!
//! The symbolic engine itself is an external collaborator. This crate pins
//! down the narrow surface the bridge consumes: four primitives on a live
//! engine instance ([`Engine`]), a way to construct instances bound to a
//! shared output buffer ([`EngineFactory`] + [`SideEffectSink`]), and the
//! directive strings the bridge submits during bootstrap ([`directive`]).

pub mod directive;
mod sink;

pub use sink::SideEffectSink;

/// A live engine instance, consumed through the four primitives the native
/// yacas API exposes.
///
/// `evaluate` takes a single directive or user expression and may leave the
/// engine in an error state; `is_error`, `error` and `result` report on the
/// most recent `evaluate` call. Anything the engine prints as a side effect
/// goes to the [`SideEffectSink`] it was spawned with, not through this trait.
pub trait Engine {
    /// Submit one directive or expression for evaluation.
    fn evaluate(&mut self, command: &str);

    /// Whether the last `evaluate` left the engine in an error state.
    fn is_error(&self) -> bool;

    /// The engine's error message for the last failed evaluation.
    fn error(&self) -> String;

    /// The textual result of the last successful evaluation.
    fn result(&self) -> String;
}

/// Constructs engine instances bound to a side-effect sink.
///
/// The session spawns one instance at bootstrap and a fresh one on every
/// forced re-initialization; implementations must not share evaluation state
/// between spawned instances.
pub trait EngineFactory {
    fn spawn(&self, sink: SideEffectSink) -> Box<dyn Engine>;
}
