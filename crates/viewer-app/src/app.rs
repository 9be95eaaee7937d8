//! Composition root — assembles the browser adapters and hands them to the
//! bootstrapper.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_utils::format::JsValueSerdeExt;
use serde_json::Value;
use wasm_bindgen::JsValue;

use viewer_core::bootstrap::{BootstrapState, EmbeddedViewerBootstrapper, ViewerPorts};
use viewer_core::configuration::ConfigurationService;
use viewer_core::event_bus::EventBus;
use viewer_core::registry::DataSetRegistry;
use viewer_platform::dom::DomHost;
use viewer_platform::http::GlooServiceClient;
use viewer_platform::loader::ScriptModuleLoader;
use viewer_platform::viewer::{TissueStackColorMaps, TissueStackViewer};
use viewer_types::config::{BootstrapSettings, EmbedArgs};

/// One embedded viewer
pub struct ViewerApp {
    bootstrapper: EmbeddedViewerBootstrapper,
}

impl ViewerApp {
    pub fn new(settings: BootstrapSettings) -> Self {
        let viewer = Rc::new(TissueStackViewer::new());
        let ports = ViewerPorts {
            service: Rc::new(GlooServiceClient::new()),
            modules: Rc::new(ScriptModuleLoader::new()),
            host: Rc::new(DomHost::new(settings.widget_slot)),
            store: viewer.clone(),
            widgets: viewer,
            color_maps: Rc::new(TissueStackColorMaps::new()),
        };

        let configuration = ConfigurationService::new(&settings.default_proxy_path);
        let bootstrapper = EmbeddedViewerBootstrapper::new(
            ports,
            settings,
            configuration,
            DataSetRegistry::new(),
            EventBus::new(),
        );

        Self { bootstrapper }
    }

    /// Progress events, queued until the page drains them
    pub fn event_bus(&self) -> EventBus {
        self.bootstrapper.event_bus.clone()
    }

    /// Live bootstrap state, updated as each step completes
    pub fn state(&self) -> Rc<RefCell<BootstrapState>> {
        self.bootstrapper.state_handle()
    }

    /// Run the bootstrap sequence in the background.
    pub fn start(self, args: EmbedArgs) {
        let Self { mut bootstrapper } = self;
        wasm_bindgen_futures::spawn_local(async move {
            match bootstrapper.run(args).await {
                Ok(config) => log::info!(
                    "Viewer ready in #{} (data set {} from {})",
                    config.container_id,
                    config.data_set_id,
                    config.server_host
                ),
                Err(e) => log::warn!("Viewer not started: {}", e),
            }
        });
    }
}

/// Drain `event_bus` into a JS array of event objects, oldest first.
pub fn drain_events(event_bus: &EventBus) -> JsValue {
    let events = event_bus.drain();
    JsValue::from_serde(&events).unwrap_or_else(|e| {
        log::warn!("Dropped {} bootstrap events: {}", events.len(), e);
        JsValue::NULL
    })
}

/// Turn whatever the page passed into JSON; unrepresentable values
/// (undefined, functions) become null.
pub fn to_json(value: &JsValue) -> Value {
    if value.is_undefined() {
        return Value::Null;
    }
    value.into_serde::<Value>().unwrap_or(Value::Null)
}

pub fn embed_args(
    container_id: &JsValue,
    server: &JsValue,
    data_set_id: &JsValue,
    include_cross_hair: &JsValue,
    use_image_service: &JsValue,
    init_opts: &JsValue,
) -> EmbedArgs {
    EmbedArgs {
        container_id: to_json(container_id),
        server: to_json(server),
        data_set_id: to_json(data_set_id),
        include_cross_hair: to_json(include_cross_hair),
        use_image_service: to_json(use_image_service),
        init_opts: to_json(init_opts),
    }
}
