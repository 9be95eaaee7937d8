use async_trait::async_trait;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use viewer_core::configuration::ConfigurationService;
use viewer_core::ports::ColorMapPort;
use viewer_types::Result;
use super::{bindings, js_err, namespace};

/// Hands the server configuration to `TissueStack.configuration` and lets
/// the viewer fetch its color maps from the configured location.
#[derive(Default)]
pub struct TissueStackColorMaps;

impl TissueStackColorMaps {
    pub fn new() -> Self {
        Self
    }

    fn mirror_configuration(configuration: &ConfigurationService) -> Result<()> {
        let ns = namespace()?;
        let key = JsValue::from_str("configuration");
        let target = match Reflect::get(&ns, &key).map_err(js_err)?.dyn_into::<Object>() {
            Ok(existing) => existing,
            Err(_) => {
                let fresh = Object::new();
                Reflect::set(&ns, &key, &fresh).map_err(js_err)?;
                fresh
            }
        };

        for (name, entry) in configuration.entries() {
            let record = Object::new();
            Reflect::set(&record, &"value".into(), &JsValue::from_str(&entry.value)).map_err(js_err)?;
            Reflect::set(&record, &"description".into(), &JsValue::from_str(&entry.description))
                .map_err(js_err)?;
            Reflect::set(&target, &JsValue::from_str(&name), &record).map_err(js_err)?;
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ColorMapPort for TissueStackColorMaps {
    async fn load_color_maps(&self, configuration: &ConfigurationService) -> Result<()> {
        Self::mirror_configuration(configuration)?;
        bindings::load_color_maps().map_err(js_err)?;
        log::info!("Color maps requested");
        Ok(())
    }
}
