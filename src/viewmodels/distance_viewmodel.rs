// ============================================================================
// DISTANCE VIEWMODEL - Suma de tramos y total en km
// ============================================================================

use crate::maps::Directions;
use crate::models::Route;
use crate::state::RouteState;
use crate::utils::constants::{DISTANCE_UNIT_SUFFIX, METERS_PER_KILOMETER};

pub struct DistanceViewModel;

impl DistanceViewModel {
    /// Suma de `distance.value` de todos los tramos (metros).
    /// `fold` desde 0.0: `sum()` de f64 vacío da -0.0 y se mostraría "-0 km".
    pub fn total_meters(route: &Route) -> f64 {
        route.legs.iter().fold(0.0, |acc, leg| acc + leg.distance.value)
    }

    pub fn total_kilometers(route: &Route) -> f64 {
        Self::total_meters(route) / METERS_PER_KILOMETER
    }

    /// "<n> km" sin decimales fijos (4.0 → "4 km", 1.25 → "1.25 km")
    pub fn format_total(total_km: f64) -> String {
        format!("{}{}", total_km, DISTANCE_UNIT_SUFFIX)
    }

    /// Recalcular el total desde cero.
    /// Sin ruta no se toca el estado (el total anterior sigue en pantalla).
    pub fn compute_total_distance<D: Directions>(directions: Option<&D>, state: &RouteState) -> Option<f64> {
        let Some(route) = directions.and_then(|d| d.first_route()) else {
            log::debug!("🛣️ [DISTANCE] Sin ruta, nada que recalcular");
            return None;
        };

        let total_km = Self::total_kilometers(&route);
        log::info!("📏 [DISTANCE] {} tramos, total {} km", route.legs.len(), total_km);
        state.show_total(total_km);
        Some(total_km)
    }
}
