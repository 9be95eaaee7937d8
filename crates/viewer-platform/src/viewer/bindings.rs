use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // ─── ComponentFactory ────────────────────────────────

    #[wasm_bindgen(catch, js_namespace = ["TissueStack", "ComponentFactory"], js_name = createDataSetWidget)]
    pub fn create_data_set_widget(
        container_id: &str,
        data_set: &JsValue,
        slot_index: u32,
        host: &str,
        include_cross_hair: bool,
        managed: bool,
        use_image_service: bool,
    ) -> Result<JsValue, JsValue>;

    // ─── Utils ───────────────────────────────────────────

    #[wasm_bindgen(catch, js_namespace = ["TissueStack", "Utils"], js_name = loadColorMaps)]
    pub fn load_color_maps() -> Result<JsValue, JsValue>;

    // ─── DataSetStore ────────────────────────────────────

    #[wasm_bindgen(js_namespace = TissueStack, js_name = DataSetStore)]
    #[derive(Debug, Clone)]
    pub type JsDataSetStore;

    #[wasm_bindgen(catch, constructor, js_namespace = TissueStack, js_class = "DataSetStore")]
    pub fn new(data_sets: &JsValue, include_planes: bool) -> Result<JsDataSetStore, JsValue>;

    #[wasm_bindgen(catch, method, js_class = "DataSetStore", js_name = addDataSetToStore)]
    pub fn add_data_set_to_store(this: &JsDataSetStore, data_set: &JsValue, host: &str) -> Result<JsValue, JsValue>;

    // ─── Plane ───────────────────────────────────────────

    #[derive(Debug, Clone)]
    pub type JsPlane;

    #[wasm_bindgen(method, js_name = changeToZoomLevel)]
    pub fn change_to_zoom_level(this: &JsPlane, level: u32);

    #[wasm_bindgen(method, js_name = getDataExtent)]
    pub fn get_data_extent(this: &JsPlane) -> JsExtent;

    #[wasm_bindgen(method, js_name = getRelativeCrossCoordinates)]
    pub fn get_relative_cross_coordinates(this: &JsPlane) -> JsValue;

    #[wasm_bindgen(method, js_name = resizeCanvas)]
    pub fn resize_canvas(this: &JsPlane);

    #[wasm_bindgen(method, getter)]
    pub fn events(this: &JsPlane) -> JsEvents;

    #[wasm_bindgen(method, getter)]
    pub fn queue(this: &JsPlane) -> JsQueue;

    // ─── Extent ──────────────────────────────────────────

    pub type JsExtent;

    #[wasm_bindgen(method, getter = worldCoordinatesTransformationMatrix)]
    pub fn world_transform(this: &JsExtent) -> JsValue;

    #[wasm_bindgen(method, js_name = getPixelForWorldCoordinates)]
    pub fn get_pixel_for_world_coordinates(this: &JsExtent, world: &JsValue) -> JsValue;

    #[wasm_bindgen(method, getter)]
    pub fn slice(this: &JsExtent) -> JsValue;

    #[wasm_bindgen(method, getter)]
    pub fn zoom_levels(this: &JsExtent) -> JsValue;

    // ─── Events / Queue ──────────────────────────────────

    pub type JsEvents;

    #[wasm_bindgen(method, js_name = changeSliceForPlane)]
    pub fn change_slice_for_plane(this: &JsEvents, slice: f64);

    pub type JsQueue;

    #[wasm_bindgen(method, js_name = drawLowResolutionPreview)]
    pub fn draw_low_resolution_preview(this: &JsQueue, timestamp: f64);

    #[wasm_bindgen(method, js_name = drawRequestAfterLowResolutionPreview)]
    pub fn draw_request_after_low_resolution_preview(this: &JsQueue, request: &JsValue, timestamp: f64);
}
