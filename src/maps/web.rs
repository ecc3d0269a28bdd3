use async_trait::async_trait;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

use crate::config::MapConfig;
use crate::models::{Leg, Route, RouteRequest};
use crate::utils::constants::DIRECTIONS_CHANGED_EVENT;
use crate::utils::google_maps_ffi::{DirectionsRenderer, DirectionsService, Map};
use super::{Directions, RouteDisplay, RouteStatus, RoutingFailure, RoutingService};

/// DirectionsResult de Google tal cual (handle opaco para el renderer)
#[derive(Clone)]
pub struct GoogleDirections(JsValue);

impl GoogleDirections {
    pub fn as_js(&self) -> &JsValue {
        &self.0
    }
}

impl Directions for GoogleDirections {
    fn first_route(&self) -> Option<Route> {
        let routes = get(&self.0, "routes")?.dyn_into::<Array>().ok()?;
        let route = routes.get(0);
        if route.is_undefined() || route.is_null() {
            return None;
        }

        let legs = get(&route, "legs")
            .and_then(|legs| legs.dyn_into::<Array>().ok())
            .map(|legs| {
                legs.iter()
                    .map(|leg| {
                        let meters = get(&leg, "distance")
                            .and_then(|distance| get(&distance, "value"))
                            .and_then(|value| value.as_f64())
                            .unwrap_or_else(|| {
                                log::warn!("⚠️ [MAPS] Tramo sin distance.value, se cuenta como 0");
                                0.0
                            });
                        Leg::meters(meters)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Route { legs })
    }
}

/// Leer `target[key]`, `None` si no existe o es null
fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

// ----------------------------------------------------------------------------
// DirectionsService
// ----------------------------------------------------------------------------

pub struct GoogleRoutingService {
    service: DirectionsService,
}

impl GoogleRoutingService {
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self {
            service: DirectionsService::new()?,
        })
    }
}

#[async_trait(?Send)]
impl RoutingService for GoogleRoutingService {
    type Directions = GoogleDirections;

    async fn route(&self, request: &RouteRequest) -> Result<GoogleDirections, RoutingFailure> {
        let json = serde_json::to_string(request)
            .map_err(|e| RoutingFailure::new(RouteStatus::InvalidRequest, format!("Serialization error: {}", e)))?;
        let js_request = js_sys::JSON::parse(&json)
            .map_err(|e| RoutingFailure::new(RouteStatus::InvalidRequest, js_error_message(&e)))?;

        log::info!("🧭 [MAPS] Pidiendo ruta {} → {} ({} waypoints)",
                   request.origin, request.destination, request.waypoints.len());

        JsFuture::from(self.service.route(&js_request))
            .await
            .map(GoogleDirections)
            .map_err(|e| routing_failure_from_js(&e))
    }
}

/// MapsRequestError trae `code` (DirectionsStatus) y `message`
fn routing_failure_from_js(error: &JsValue) -> RoutingFailure {
    let status = get(error, "code")
        .and_then(|code| code.as_string())
        .map(|code| RouteStatus::from_code(&code))
        .unwrap_or(RouteStatus::UnknownError);
    RoutingFailure::new(status, js_error_message(error))
}

fn js_error_message(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.to_string()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

// ----------------------------------------------------------------------------
// Map + DirectionsRenderer
// ----------------------------------------------------------------------------

/// Mapa con un DirectionsRenderer arrastrable
pub struct GoogleRouteDisplay {
    _map: Map,
    renderer: DirectionsRenderer,
}

impl GoogleRouteDisplay {
    pub fn new(container: &Element, panel: Option<&Element>, config: &MapConfig) -> Result<Self, JsValue> {
        log::info!("🗺️ [MAPS] Inicializando Google Maps (zoom {}, centro {}, {})",
                   config.default_zoom, config.default_center_lat, config.default_center_lng);

        let center = Object::new();
        Reflect::set(&center, &"lat".into(), &config.default_center_lat.into())?;
        Reflect::set(&center, &"lng".into(), &config.default_center_lng.into())?;

        let map_options = Object::new();
        Reflect::set(&map_options, &"zoom".into(), &config.default_zoom.into())?;
        Reflect::set(&map_options, &"center".into(), &center)?;
        let map = Map::new(container, &map_options)?;

        let renderer_options = Object::new();
        Reflect::set(&renderer_options, &"draggable".into(), &config.draggable_route.into())?;
        Reflect::set(&renderer_options, &"map".into(), &map)?;
        if let Some(panel) = panel {
            Reflect::set(&renderer_options, &"panel".into(), panel)?;
        }
        let renderer = DirectionsRenderer::new(&renderer_options)?;

        Ok(Self { _map: map, renderer })
    }
}

impl RouteDisplay for GoogleRouteDisplay {
    type Directions = GoogleDirections;

    fn set_directions(&self, directions: &GoogleDirections) {
        self.renderer.set_directions(directions.as_js());
    }

    fn directions(&self) -> Option<GoogleDirections> {
        let current = self.renderer.get_directions();
        if current.is_undefined() || current.is_null() {
            None
        } else {
            Some(GoogleDirections(current))
        }
    }

    fn subscribe_directions_changed(&self, listener: Box<dyn Fn()>) -> Result<(), String> {
        let closure = Closure::wrap(Box::new(move || listener()) as Box<dyn FnMut()>);
        self.renderer
            .add_listener(DIRECTIONS_CHANGED_EVENT, closure.as_ref().unchecked_ref());
        // Nota: el renderer vive toda la página, el listener se registra una sola vez
        closure.forget();
        Ok(())
    }
}
