// ============================================================================
// ROUTE VIEWMODEL - Construye el request y lo manda al servicio de rutas
// ============================================================================

use crate::maps::{RouteDisplay, RoutingFailure, RoutingService};
use crate::models::{PlaceList, RouteRequest, TravelMode, Waypoint};
use crate::utils::constants::ROUTE_FAILURE_ALERT_PREFIX;
use crate::views::Notifier;

pub struct RouteViewModel;

impl RouteViewModel {
    /// Request a pie: origen, destino y waypoints en orden, todos con el sufijo de localidad
    pub fn build_request(places: &PlaceList, locality_suffix: &str) -> RouteRequest {
        RouteRequest {
            origin: Self::with_locality(places.origin(), locality_suffix),
            destination: Self::with_locality(places.destination(), locality_suffix),
            waypoints: places
                .waypoints()
                .iter()
                .map(|place| Waypoint {
                    location: Self::with_locality(place, locality_suffix),
                })
                .collect(),
            travel_mode: TravelMode::Walking,
        }
    }

    pub fn with_locality(place: &str, locality_suffix: &str) -> String {
        let suffix = locality_suffix.trim();
        if suffix.is_empty() {
            place.to_string()
        } else {
            format!("{} {}", place, suffix)
        }
    }

    /// Pedir la ruta y mostrarla. Si falla: un único alert, sin reintentos.
    pub async fn display_route<S, D>(
        service: &S,
        display: &D,
        notifier: &dyn Notifier,
        request: &RouteRequest,
    ) -> Result<(), RoutingFailure>
    where
        S: RoutingService,
        D: RouteDisplay<Directions = S::Directions>,
    {
        match service.route(request).await {
            Ok(directions) => {
                log::debug!("📦 [ROUTE] Ruta recibida, {} waypoints", request.waypoints.len());
                display.set_directions(&directions);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [ROUTE] Error del servicio de rutas: {} ({})", e, e.status.code());
                notifier.alert(&format!("{}{}", ROUTE_FAILURE_ALERT_PREFIX, e));
                Err(e)
            }
        }
    }
}
