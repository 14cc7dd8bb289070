//! Application state for the web layer.

use crate::gateway::StationApi;
use crate::session::Controller;

/// Shared application state.
///
/// The server hosts one map client: every request drives the same session,
/// so filters, the open detail and queued alerts are common to all page
/// views.
pub struct AppState<A> {
    /// Drives the single client session
    pub controller: Controller<A>,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
        }
    }
}

impl<A: StationApi> AppState<A> {
    /// Create a new app state.
    pub fn new(controller: Controller<A>) -> Self {
        Self { controller }
    }
}
