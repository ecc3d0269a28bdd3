use serde::{Deserialize, Serialize};

/// Modo de viaje (mismo valor que `google.maps.TravelMode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Walking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: String,
}

/// Request enviado a `DirectionsService.route`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub waypoints: Vec<Waypoint>,
    pub travel_mode: TravelMode,
}

// ----------------------------------------------------------------------------
// Resultado - solo los campos que usamos de DirectionsResult
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub distance: Distance,
}

/// Distancia de un tramo: `value` en metros, `text` formateado por el servicio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Leg {
    pub fn meters(value: f64) -> Self {
        Self {
            distance: Distance { value, text: None },
        }
    }
}

impl RouteResult {
    /// Primera ruta candidata (la que muestra el renderer)
    pub fn primary_route(&self) -> Option<&Route> {
        self.routes.first()
    }
}
