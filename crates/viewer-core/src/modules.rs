//! Viewer dependencies: one stylesheet plus a fixed manifest of script
//! modules, all served by the viewer host.

use std::cell::Cell;
use viewer_types::{Result, ViewerError, config::BootstrapSettings};
use crate::ports::ModuleLoaderPort;

/// Counts successful module loads against the required number.
pub struct LoadCounter {
    required: usize,
    loaded: Cell<usize>,
}

impl LoadCounter {
    pub fn new(required: usize) -> Self {
        Self { required, loaded: Cell::new(0) }
    }

    /// Record one successful load. Returns `true` exactly once: on the
    /// call that brings the count up to the required number.
    pub fn record_success(&self) -> bool {
        let loaded = self.loaded.get() + 1;
        self.loaded.set(loaded);
        loaded == self.required
    }

    pub fn loaded(&self) -> usize {
        self.loaded.get()
    }

    pub fn required(&self) -> usize {
        self.required
    }
}

pub fn resource_url(host: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("http://{}{}", host, path)
    } else {
        format!("http://{}/{}", host, path)
    }
}

/// Load the stylesheet and every required module from `host`, then run
/// `on_complete` once all of them are in. The first failing module stops
/// loading and `on_complete` never runs.
pub async fn load_dependencies<F, T>(
    loader: &dyn ModuleLoaderPort,
    host: &str,
    settings: &BootstrapSettings,
    on_complete: F,
) -> Result<T>
where
    F: FnOnce(usize) -> T,
{
    let css = resource_url(host, &settings.stylesheet);
    if let Err(e) = loader.load_stylesheet(&css).await {
        log::warn!("Stylesheet {} not attached: {}", css, e);
    }

    let counter = LoadCounter::new(settings.required_modules.len());
    let mut on_complete = Some(on_complete);
    let mut result = None;

    if counter.required() == 0 {
        result = on_complete.take().map(|f| f(0));
    }

    for module in &settings.required_modules {
        let url = resource_url(host, module);
        log::debug!("Loading module {}", url);
        loader
            .load_module(&url, settings.dependency_timeout_ms)
            .await
            .map_err(|e| {
                log::error!("Module {} failed to load: {}", url, e);
                match e {
                    ViewerError::DependencyLoad(_) => e,
                    other => ViewerError::DependencyLoad(format!("{}: {}", module, other)),
                }
            })?;

        if counter.record_success() {
            result = on_complete.take().map(|f| f(counter.loaded()));
        }
    }

    result.ok_or_else(|| {
        ViewerError::DependencyLoad(format!(
            "{} of {} modules loaded",
            counter.loaded(),
            counter.required()
        ))
    })
}
