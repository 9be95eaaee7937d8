use std::rc::Rc;
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use viewer_core::ports::{LoadedDataSet, PlaneView};
use viewer_types::data_set::Coordinates;
use super::bindings::JsPlane;

/// A data set living in the JavaScript data set store
pub struct JsDataSet {
    id: u64,
    object: JsValue,
}

impl JsDataSet {
    pub fn new(id: u64, object: JsValue) -> Self {
        Self { id, object }
    }

    pub fn object(&self) -> &JsValue {
        &self.object
    }

    fn planes_object(&self) -> Option<Object> {
        Reflect::get(&self.object, &JsValue::from_str("planes"))
            .ok()
            .and_then(|p| p.dyn_into::<Object>().ok())
    }
}

impl LoadedDataSet for JsDataSet {
    fn id(&self) -> u64 {
        self.id
    }

    fn plane(&self, plane_id: &str) -> Option<Rc<dyn PlaneView>> {
        let planes = self.planes_object()?;
        let plane = Reflect::get(&planes, &JsValue::from_str(plane_id)).ok()?;
        if plane.is_undefined() || plane.is_null() {
            return None;
        }
        Some(Rc::new(JsPlaneView::new(plane_id, plane.unchecked_into())))
    }

    fn planes(&self) -> Vec<Rc<dyn PlaneView>> {
        let Some(planes) = self.planes_object() else {
            return Vec::new();
        };
        Object::keys(&planes)
            .iter()
            .filter_map(|key| key.as_string())
            .filter_map(|id| self.plane(&id))
            .collect()
    }
}

pub struct JsPlaneView {
    id: String,
    plane: JsPlane,
}

impl JsPlaneView {
    pub fn new(id: &str, plane: JsPlane) -> Self {
        Self { id: id.to_string(), plane }
    }

    fn set_property(&self, name: &str, value: &JsValue) {
        if let Err(e) = Reflect::set(&self.plane, &JsValue::from_str(name), value) {
            log::warn!("Plane {}: could not set {}: {:?}", self.id, name, e);
        }
    }
}

impl PlaneView for JsPlaneView {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn zoom_level_count(&self) -> usize {
        let levels = self.plane.get_data_extent().zoom_levels();
        if Array::is_array(&levels) {
            Array::from(&levels).length() as usize
        } else {
            0
        }
    }

    fn change_to_zoom_level(&self, level: usize) {
        self.plane.change_to_zoom_level(level as u32);
    }

    fn set_color_map(&self, name: &str) {
        self.set_property("color_map", &JsValue::from_str(name));
        self.set_property("is_color_map_tiled", &JsValue::NULL);
    }

    fn has_world_transform(&self) -> bool {
        self.plane.get_data_extent().world_transform().is_truthy()
    }

    fn world_to_pixel(&self, world: Coordinates) -> Coordinates {
        let converted = JsValue::from_serde(&world).ok().and_then(|js| {
            self.plane
                .get_data_extent()
                .get_pixel_for_world_coordinates(&js)
                .into_serde::<Coordinates>()
                .ok()
        });
        converted.unwrap_or_else(|| {
            log::warn!("Plane {}: world coordinates {:?} not mappable", self.id, world);
            world
        })
    }

    fn relative_cross_coordinates(&self) -> Coordinates {
        self.plane
            .get_relative_cross_coordinates()
            .into_serde()
            .unwrap_or_default()
    }

    fn current_slice(&self) -> f64 {
        self.plane.get_data_extent().slice().as_f64().unwrap_or(0.0)
    }

    fn change_slice(&self, slice: f64) {
        self.plane.events().change_slice_for_plane(slice);
    }

    fn draw_low_resolution_preview(&self, timestamp: i64) {
        self.plane.queue().draw_low_resolution_preview(timestamp as f64);
    }

    fn draw_after_low_resolution_preview(&self, timestamp: i64) {
        self.plane
            .queue()
            .draw_request_after_low_resolution_preview(&JsValue::NULL, timestamp as f64);
    }

    fn resize_canvas(&self) {
        self.plane.resize_canvas();
    }
}
