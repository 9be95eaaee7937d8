//! Adapters for the viewer's JavaScript collaborators (the `TissueStack`
//! namespace): data set store, widget factory, planes and color maps.
//!
//! The collaborators arrive with the dependency modules, so every binding
//! here is resolved lazily at call time.

pub mod bindings;
pub mod color_maps;
pub mod data_set;
pub mod widgets;

pub use color_maps::TissueStackColorMaps;
pub use data_set::{JsDataSet, JsPlaneView};
pub use widgets::TissueStackViewer;

use wasm_bindgen::JsValue;
use viewer_types::ViewerError;

pub(crate) fn js_err(e: JsValue) -> ViewerError {
    ViewerError::JsInterop(
        e.as_string()
            .or_else(|| js_sys::JSON::stringify(&e).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| format!("{:?}", e)),
    )
}

/// The global `TissueStack` object
pub(crate) fn namespace() -> Result<js_sys::Object, ViewerError> {
    use wasm_bindgen::JsCast;
    let ns = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("TissueStack"))
        .map_err(js_err)?;
    ns.dyn_into::<js_sys::Object>()
        .map_err(|_| ViewerError::JsInterop("TissueStack namespace not loaded".to_string()))
}
