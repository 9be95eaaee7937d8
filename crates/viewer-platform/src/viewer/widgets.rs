use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use gloo_utils::format::JsValueSerdeExt;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

use viewer_core::ports::{DataSetStorePort, LoadedDataSet, WidgetFactoryPort};
use viewer_types::{
    Result, ViewerError,
    data_set::{DatasetDescriptor, WidgetRequest},
};
use super::bindings::{self, JsDataSetStore};
use super::{js_err, namespace, JsDataSet};

/// Data set store and widget factory of the JavaScript viewer.
///
/// Each load starts from a fresh store, which is also published as
/// `TissueStack.dataSetStore` because the drawing code looks it up there.
#[derive(Default)]
pub struct TissueStackViewer {
    store: RefCell<Option<JsDataSetStore>>,
    loaded: RefCell<HashMap<u64, JsValue>>,
}

impl TissueStackViewer {
    pub fn new() -> Self {
        Self::default()
    }

    fn publish_store(store: &JsDataSetStore) -> Result<()> {
        let ns = namespace()?;
        Reflect::set(&ns, &JsValue::from_str("dataSetStore"), store).map_err(js_err)?;
        Ok(())
    }
}

impl DataSetStorePort for TissueStackViewer {
    fn add_data_set(&self, descriptor: &DatasetDescriptor, host: &str) -> Result<Rc<dyn LoadedDataSet>> {
        let store = JsDataSetStore::new(&JsValue::NULL, true).map_err(js_err)?;
        Self::publish_store(&store)?;

        let raw = JsValue::from_serde(descriptor)?;
        let object = store.add_data_set_to_store(&raw, host).map_err(js_err)?;
        if object.is_undefined() || object.is_null() {
            return Err(ViewerError::JsInterop(format!(
                "data set store rejected data set {}",
                descriptor.id
            )));
        }

        let mut loaded = self.loaded.borrow_mut();
        loaded.clear();
        loaded.insert(descriptor.id, object.clone());
        *self.store.borrow_mut() = Some(store);

        Ok(Rc::new(JsDataSet::new(descriptor.id, object)))
    }
}

impl WidgetFactoryPort for TissueStackViewer {
    fn create_data_set_widget(&self, request: &WidgetRequest, data_set: &dyn LoadedDataSet) -> Result<()> {
        let loaded = self.loaded.borrow();
        let object = loaded.get(&data_set.id()).ok_or_else(|| {
            ViewerError::Other(format!("data set {} was never added to the store", data_set.id()))
        })?;

        bindings::create_data_set_widget(
            &request.container_id,
            object,
            request.slot_index,
            &request.host,
            request.include_cross_hair,
            request.managed,
            request.use_image_service,
        )
        .map_err(js_err)?;
        Ok(())
    }
}
