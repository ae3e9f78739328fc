use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared text buffer the engine writes print/diagnostic output into.
///
/// Cloning yields another handle to the same buffer, so the session keeps one
/// handle for reading/clearing while the spawned engine keeps another for
/// writing. The session clears it before every evaluation, so one call's
/// output never leaks into the next response.
#[derive(Clone, Default)]
pub struct SideEffectSink {
    buf: Arc<Mutex<String>>,
}

impl SideEffectSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        // A poisoned lock only means a writer panicked mid-push; the text is
        // still usable.
        self.buf.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Discard everything accumulated so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Copy of the current contents, without clearing them.
    pub fn snapshot(&self) -> String {
        self.lock().clone()
    }

    /// Append text, as the engine does while evaluating.
    pub fn push_str(&self, text: &str) {
        self.lock().push_str(text);
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl fmt::Write for SideEffectSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for SideEffectSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SideEffectSink").field(&self.snapshot()).finish()
    }
}
