//! Viewer core — bootstrap orchestration behind port traits.
//!
//! Nothing in here touches the browser; `viewer-platform` supplies the
//! adapters and `viewer-app` wires them together.

pub mod bootstrap;
pub mod configuration;
pub mod event_bus;
pub mod host;
pub mod modules;
pub mod ports;
pub mod registry;
pub mod services;
pub mod user_params;
