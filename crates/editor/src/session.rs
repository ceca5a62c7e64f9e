//! The per-session state container.

use promptforge_core::serialize;
use promptforge_core::{CoreError, Intent, PromptSpec};

/// Owns the canonical configuration root for one editing session.
///
/// Every mutation goes through [`EditorSession::dispatch`]: the reducer
/// computes a new snapshot and it is installed atomically from the
/// caller's point of view (read current, compute one new root, replace).
/// The session is created at session start, replaced wholesale on reset,
/// and dropped when the session ends; nothing is persisted.
#[derive(Debug, Clone)]
pub struct EditorSession {
    current: PromptSpec,
}

impl EditorSession {
    /// Start a session with the canonical default instance.
    pub fn new() -> Self {
        Self {
            current: PromptSpec::new(),
        }
    }

    /// The current snapshot. Callers may clone and keep it; dispatching
    /// never invalidates an old snapshot.
    pub fn spec(&self) -> &PromptSpec {
        &self.current
    }

    /// Apply one intent and install the resulting snapshot.
    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!(?intent, "applying edit intent");
        self.current = promptforge_core::reduce(&self.current, intent);
    }

    /// The live preview / clipboard text: compact projection, 2-space
    /// indented, empty fields omitted.
    pub fn display_text(&self) -> Result<String, CoreError> {
        serialize::to_display_text(&self.current)
    }

    /// Lossless pretty-JSON export of the current snapshot.
    pub fn export_json(&self) -> Result<String, CoreError> {
        serialize::to_json(&self.current)
    }

    /// The verbatim payload for the collaborator's "copy" action. The
    /// clipboard write itself is a fire-and-forget side effect at the
    /// collaborator boundary.
    pub fn copy_payload(&self) -> Result<String, CoreError> {
        self.display_text()
    }

    /// Replace the root wholesale with the default instance. The
    /// confirmation gate lives with the collaborator: a declined
    /// confirmation simply never calls this.
    pub fn reset(&mut self) {
        tracing::info!("resetting session to defaults");
        self.dispatch(Intent::Reset);
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
