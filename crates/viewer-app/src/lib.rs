//! Embedded viewer — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer). A page calls
//! `embed(...)` once per viewer it wants to show.

mod app;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use viewer_core::bootstrap::BootstrapState;
use viewer_core::event_bus::EventBus;
use viewer_types::config::BootstrapSettings;

pub use app::{drain_events, embed_args, to_json, ViewerApp};

/// WASM module initialisation — called once when the module loads
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Embedded viewer module loaded");
}

/// Handle returned to the page
#[wasm_bindgen]
pub struct EmbeddedViewer {
    state: Rc<RefCell<BootstrapState>>,
    events: EventBus,
}

#[wasm_bindgen]
impl EmbeddedViewer {
    /// Current step, e.g. `configured`, `ready` or `failed: <message>`
    pub fn status(&self) -> String {
        self.state.borrow().to_string()
    }

    /// Progress events emitted since the last call
    #[wasm_bindgen(js_name = takeEvents)]
    pub fn take_events(&self) -> JsValue {
        drain_events(&self.events)
    }

    #[wasm_bindgen(js_name = hasEvents)]
    pub fn has_events(&self) -> bool {
        self.events.has_pending()
    }
}

/// Embed a viewer for `data_set_id` served by `server` into the element
/// with id `container_id`. Problems are reported on the page, never thrown.
#[wasm_bindgen]
pub fn embed(
    container_id: JsValue,
    server: JsValue,
    data_set_id: JsValue,
    include_cross_hair: JsValue,
    use_image_service: JsValue,
    init_opts: JsValue,
) -> EmbeddedViewer {
    let args = embed_args(
        &container_id,
        &server,
        &data_set_id,
        &include_cross_hair,
        &use_image_service,
        &init_opts,
    );

    let app = ViewerApp::new(BootstrapSettings::default());
    let state = app.state();
    let events = app.event_bus();
    app.start(args);

    EmbeddedViewer { state, events }
}
