//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `viewer-core` (pure Rust).
//! Implementations live in `viewer-platform` (browser adapters and
//! bindings to the viewer's JavaScript collaborators).
//! The core never imports platform code; it only depends on these traits.

use std::rc::Rc;
use async_trait::async_trait;
use serde_json::Value;
use viewer_types::{
    Result,
    data_set::{Coordinates, DatasetDescriptor, WidgetRequest},
};
use crate::configuration::ConfigurationService;

// ─── Service Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ServicePort {
    /// GET a URL and parse the body as JSON.
    /// Transport problems (unreachable, non-2xx, unparsable body) map to
    /// `ViewerError::Transport`.
    async fn get_json(&self, url: &str) -> Result<Value>;
}

// ─── Module Loader Port ──────────────────────────────────────

#[async_trait(?Send)]
pub trait ModuleLoaderPort {
    /// Attach a stylesheet to the page
    async fn load_stylesheet(&self, url: &str) -> Result<()>;

    /// Fetch and evaluate a script module. Exceeding `timeout_ms`
    /// fails with `ViewerError::Timeout`.
    async fn load_module(&self, url: &str, timeout_ms: u64) -> Result<()>;
}

// ─── Host Port ───────────────────────────────────────────────

/// The page the viewer is embedded into
pub trait HostPort {
    fn container_exists(&self, container_id: &str) -> bool;

    /// Replace the container's content with a message
    fn write_into_container(&self, container_id: &str, message: &str);

    /// Blocking user notification
    fn alert(&self, message: &str);

    fn supports_canvas(&self) -> bool;

    /// Click the maximize control of a plane so it becomes the primary view.
    /// Returns `false` when no such control exists (already primary).
    fn maximize_plane(&self, plane_id: &str) -> bool;

    /// Invoke `handler` on every window resize
    fn on_resize(&self, handler: Box<dyn Fn()>) -> Result<()>;
}

// ─── Viewer collaborators ────────────────────────────────────

/// A plane of a loaded data set, owned by the rendering layer
pub trait PlaneView {
    fn id(&self) -> String;

    fn zoom_level_count(&self) -> usize;

    fn change_to_zoom_level(&self, level: usize);

    /// Set the color map and drop any tiled color map state
    fn set_color_map(&self, name: &str);

    /// Whether the data extent can map world to pixel coordinates
    fn has_world_transform(&self) -> bool;

    fn world_to_pixel(&self, world: Coordinates) -> Coordinates;

    fn relative_cross_coordinates(&self) -> Coordinates;

    fn current_slice(&self) -> f64;

    fn change_slice(&self, slice: f64);

    fn draw_low_resolution_preview(&self, timestamp: i64);

    /// Full resolution draw that supersedes the preview tagged with `timestamp`
    fn draw_after_low_resolution_preview(&self, timestamp: i64);

    fn resize_canvas(&self);
}

/// A data set that has been handed to the rendering layer
pub trait LoadedDataSet {
    fn id(&self) -> u64;

    fn plane(&self, plane_id: &str) -> Option<Rc<dyn PlaneView>>;

    fn planes(&self) -> Vec<Rc<dyn PlaneView>>;
}

pub trait DataSetStorePort {
    /// Register a descriptor with the rendering layer and get the live data set
    fn add_data_set(&self, descriptor: &DatasetDescriptor, host: &str) -> Result<Rc<dyn LoadedDataSet>>;
}

pub trait WidgetFactoryPort {
    fn create_data_set_widget(&self, request: &WidgetRequest, data_set: &dyn LoadedDataSet) -> Result<()>;
}

#[async_trait(?Send)]
pub trait ColorMapPort {
    async fn load_color_maps(&self, configuration: &ConfigurationService) -> Result<()>;
}
