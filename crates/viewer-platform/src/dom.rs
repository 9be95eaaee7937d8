//! The embedding page, seen through web-sys.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use viewer_core::ports::HostPort;
use viewer_types::{Result, ViewerError};

pub struct DomHost {
    /// Widget slot, part of the ids the widget factory generates
    slot: u32,
}

impl DomHost {
    pub fn new(slot: u32) -> Self {
        Self { slot }
    }

    fn window() -> Option<Window> {
        web_sys::window()
    }

    fn document() -> Option<Document> {
        Self::window().and_then(|w| w.document())
    }

    /// Selector of the maximize control the widget draws for a plane
    pub fn maximize_selector(slot: u32, plane_id: &str) -> String {
        format!("#dataset_{} .canvas_{}.maximize_view_icon", slot, plane_id)
    }
}

impl HostPort for DomHost {
    fn container_exists(&self, container_id: &str) -> bool {
        Self::document()
            .and_then(|d| d.get_element_by_id(container_id))
            .is_some()
    }

    fn write_into_container(&self, container_id: &str, message: &str) {
        match Self::document().and_then(|d| d.get_element_by_id(container_id)) {
            Some(el) => el.set_text_content(Some(message)),
            None => log::error!("#{} vanished, could not show: {}", container_id, message),
        }
    }

    fn alert(&self, message: &str) {
        let shown = Self::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::error!("{}", message);
        }
    }

    fn supports_canvas(&self) -> bool {
        let Some(document) = Self::document() else {
            return false;
        };
        document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .and_then(|canvas| canvas.get_context("2d").ok().flatten())
            .is_some()
    }

    fn maximize_plane(&self, plane_id: &str) -> bool {
        let Some(document) = Self::document() else {
            return false;
        };
        let selector = Self::maximize_selector(self.slot, plane_id);
        let Ok(nodes) = document.query_selector_all(&selector) else {
            return false;
        };
        // the control is only drawn for planes in a side view
        if nodes.length() != 1 {
            return false;
        }
        match nodes.get(0).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            Some(icon) => {
                icon.click();
                true
            }
            None => false,
        }
    }

    fn on_resize(&self, handler: Box<dyn Fn()>) -> Result<()> {
        let window = Self::window()
            .ok_or_else(|| ViewerError::JsInterop("No window object".to_string()))?;
        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .map_err(|e| ViewerError::JsInterop(format!("{:?}", e)))?;
        // lives as long as the page
        callback.forget();
        Ok(())
    }
}
