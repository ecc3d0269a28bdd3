// ============================================================================
// WALKING ROUTE - Ruta a pie en Google Maps con distancia total (RUST + WASM)
// ============================================================================
// - Models: lista de lugares, request y resultado de ruta
// - Maps: traits del SDK + implementación Google Maps (wasm32)
// - ViewModels: construir request / sumar tramos
// - State: total mostrado, observable
// - Views: texto del total + alerts
// - Services: lugares en localStorage + optimizador de orden (algoritmo genético)
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod maps;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wasm_bindgen::prelude::*;
    use wasm_logger::Config;

    use crate::app::App;
    use crate::config::CONFIG;
    use crate::dom::get_element_by_id;
    use crate::error::AppError;
    use crate::maps::web::{GoogleRouteDisplay, GoogleRoutingService};
    use crate::services::{LocalStoragePlaces, OptimizationService};
    use crate::views::{BrowserAlert, DomTotalOutput};

    type BrowserApp = App<GoogleRoutingService, GoogleRouteDisplay>;

    // Instancia global: mantiene vivos el mapa y los listeners
    thread_local! {
        static APP: RefCell<Option<Rc<BrowserApp>>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(Config::default());
        }
        log::info!("🚶 Walking Route - esperando initWalkingRoute()");
    }

    /// Llamada por la página cuando el script de Google Maps está listo
    /// (p.ej. `callback=initWalkingRoute` en la URL del script).
    #[wasm_bindgen(js_name = initWalkingRoute)]
    pub fn init_walking_route() -> Result<(), JsValue> {
        if APP.with(|cell| cell.borrow().is_some()) {
            log::warn!("⚠️ [MAIN] initWalkingRoute ya fue llamado, ignorando llamada duplicada");
            return Ok(());
        }

        let app = Rc::new(build_app().map_err(|e| {
            log::error!("❌ [MAIN] Error inicializando: {}", e);
            JsValue::from(e)
        })?);

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app.clone());
        });

        wasm_bindgen_futures::spawn_local(async move {
            // El error ya se mostró con alert()
            if app.start().await.is_ok() {
                log::info!("✅ [MAIN] Ruta mostrada");
            }
        });

        Ok(())
    }

    /// Ordena waypoints con coordenadas conocidas (origen y destino fijos).
    /// Entrada: JSON `[{name, latitude, longitude, city?}]`.
    /// Salida: "A,B,C" para guardar en localStorage.
    #[wasm_bindgen(js_name = optimizeStops)]
    pub fn optimize_stops(stops_json: &str) -> Result<String, JsValue> {
        // Sin getrandom: semilla desde Math.random()
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = StdRng::seed_from_u64(seed);

        OptimizationService::optimize_json(stops_json, &CONFIG.optimizer_config, &mut rng).map_err(|e| {
            log::error!("❌ [OPTIMIZER] {}", e);
            JsValue::from(e)
        })
    }

    fn build_app() -> Result<BrowserApp, AppError> {
        let config = &*CONFIG;
        let ui = &config.ui_config;

        let map_element = get_element_by_id(&ui.map_element_id)
            .ok_or_else(|| AppError::MissingElement { id: ui.map_element_id.clone() })?;
        let panel_element = get_element_by_id(&ui.panel_element_id);
        if panel_element.is_none() {
            log::warn!("⚠️ [MAIN] Sin #{}: el panel de indicaciones no se mostrará", ui.panel_element_id);
        }
        let output = DomTotalOutput::from_id(&ui.total_element_id)?;

        let service = GoogleRoutingService::new().map_err(|e| AppError::MapUnavailable(format!("{:?}", e)))?;
        let display = GoogleRouteDisplay::new(&map_element, panel_element.as_ref(), &config.map_config)
            .map_err(|e| AppError::MapUnavailable(format!("{:?}", e)))?;

        App::new(
            config,
            &LocalStoragePlaces,
            service,
            Rc::new(display),
            Rc::new(BrowserAlert),
            Rc::new(output),
        )
    }
}
