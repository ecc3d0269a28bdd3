// ============================================================================
// GOOGLE MAPS FFI - Foreign Function Interface para google.maps.*
// ============================================================================
// Solo bindings a clases JS del SDK - Sin estado, sin lógica
// El script de Google Maps debe estar cargado antes de usarlas
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `google.maps.Map`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], catch)]
    pub fn new(container: &web_sys::Element, options: &JsValue) -> Result<Map, JsValue>;

    /// `google.maps.DirectionsService`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type DirectionsService;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], catch)]
    pub fn new() -> Result<DirectionsService, JsValue>;

    /// Devuelve una Promise<DirectionsResult>
    #[wasm_bindgen(method)]
    pub fn route(this: &DirectionsService, request: &JsValue) -> js_sys::Promise;

    /// `google.maps.DirectionsRenderer`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type DirectionsRenderer;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], catch)]
    pub fn new(options: &JsValue) -> Result<DirectionsRenderer, JsValue>;

    #[wasm_bindgen(method, js_name = setDirections)]
    pub fn set_directions(this: &DirectionsRenderer, directions: &JsValue);

    /// `null`/`undefined` si todavía no hay ruta
    #[wasm_bindgen(method, js_name = getDirections)]
    pub fn get_directions(this: &DirectionsRenderer) -> JsValue;

    /// Devuelve un MapsEventListener (no lo usamos: el listener vive toda la página)
    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &DirectionsRenderer, event: &str, handler: &js_sys::Function) -> JsValue;
}
