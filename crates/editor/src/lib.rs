//! Promptforge editor session: the state container around the core
//! engine.
//!
//! [`EditorSession`] owns the canonical snapshot for one editing
//! session, funnels every mutation through [`promptforge_core::reduce`],
//! and exposes the export and reset boundary actions. Rendering,
//! clipboard writes and confirmation dialogs stay with the embedding
//! application; this crate is a library and installs no tracing
//! subscriber.

pub mod session;

pub use session::EditorSession;
