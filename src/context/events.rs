//! View update events emitted by the browser context.
//!
//! Renderers subscribe through [`ViewSink`] and re-render the affected
//! surface on each event; the core never touches a rendering API itself.

use serde::Serialize;

/// Events are serialized using serde's adjacently tagged representation:
/// `{"type": "event_name", "payload": {...}}`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum ViewEvent {
    /// The current page slice changed: new catalog, new filter, new page, or
    /// a favorite flag flipped somewhere in it.
    #[serde(rename = "catalog_view_changed")]
    CatalogViewChanged,

    /// The favorites list changed; badge counters and favorites listings
    /// should re-render.
    #[serde(rename = "favorites_changed")]
    FavoritesChanged { count: usize },

    /// The catalog fetch or parse failed. `message` is the user-visible
    /// retry instruction; catalog features stay unavailable.
    #[serde(rename = "catalog_load_failed")]
    CatalogLoadFailed { message: String },
}

impl ViewEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ViewEvent::CatalogViewChanged => "catalog_view_changed",
            ViewEvent::FavoritesChanged { .. } => "favorites_changed",
            ViewEvent::CatalogLoadFailed { .. } => "catalog_load_failed",
        }
    }
}

/// A view that wants to be told when its inputs changed.
pub trait ViewSink: Send {
    fn on_view_event(&mut self, event: &ViewEvent);
}
