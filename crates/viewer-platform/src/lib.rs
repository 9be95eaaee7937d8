//! Browser adapters for the viewer-core ports.

pub mod dom;
pub mod http;
pub mod loader;
pub mod viewer;
