//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// The context is immutable after bootstrap, so handlers read it without
/// locking.
pub type AppState = Arc<AxumContext>;
