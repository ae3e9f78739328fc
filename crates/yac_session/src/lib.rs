//! Session manager and evaluation gateway for a yacas-style symbolic engine.
//!
//! The engine does all of the algebra; this crate owns the sequencing around
//! it: bootstrap (script directory, init script, compatibility printer),
//! per-call output isolation through a shared side-effect sink, and the
//! translation of engine error flags into [`SessionError`] values.
//!
//! # Example
//!
//! ```
//! use yac_session::{Engine, EngineFactory, Session, SessionConfig, SideEffectSink};
//!
//! // A stand-in engine that echoes the last submitted command.
//! struct Echo {
//!     last: String,
//! }
//!
//! impl Engine for Echo {
//!     fn evaluate(&mut self, command: &str) {
//!         self.last = command.to_string();
//!     }
//!     fn is_error(&self) -> bool {
//!         false
//!     }
//!     fn error(&self) -> String {
//!         String::new()
//!     }
//!     fn result(&self) -> String {
//!         self.last.clone()
//!     }
//! }
//!
//! struct EchoFactory;
//!
//! impl EngineFactory for EchoFactory {
//!     fn spawn(&self, _sink: SideEffectSink) -> Box<dyn Engine> {
//!         Box::new(Echo { last: String::new() })
//!     }
//! }
//!
//! let config = SessionConfig {
//!     compat_printer: None,
//!     ..SessionConfig::default()
//! };
//! let mut session = Session::with_config(EchoFactory, config);
//!
//! let response = session.evaluate("1+1")?;
//! assert_eq!(response.result, "1+1");
//! assert_eq!(response.side_effects, "");
//! # Ok::<(), yac_session::SessionError>(())
//! ```

mod config;
mod error;
mod locator;
mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use locator::{ScriptLocator, SystemLocator, SCRIPTS_ENV_VAR};
pub use session::{Evaluation, Session};

// Engine-boundary types, re-exported so embedders only need this crate.
pub use yac_engine::{Engine, EngineFactory, SideEffectSink};
