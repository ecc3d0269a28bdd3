use async_trait::async_trait;

use crate::models::{Route, RouteRequest, RouteResult};

/// Resultado de ruta devuelto por el servicio.
/// Para nosotros es un handle opaco: solo leemos los tramos de la primera ruta.
pub trait Directions {
    /// Primera ruta del resultado (`routes[0]`), `None` si no hay ninguna
    fn first_route(&self) -> Option<Route>;
}

impl Directions for RouteResult {
    fn first_route(&self) -> Option<Route> {
        self.primary_route().cloned()
    }
}

/// Servicio que calcula rutas (una sola llamada asíncrona por página)
#[async_trait(?Send)]
pub trait RoutingService {
    type Directions: Directions;

    async fn route(&self, request: &RouteRequest) -> Result<Self::Directions, RoutingFailure>;
}

/// Widget que dibuja la ruta y avisa cuando el usuario la modifica
pub trait RouteDisplay {
    type Directions: Directions;

    fn set_directions(&self, directions: &Self::Directions);

    /// Ruta mostrada actualmente, `None` si todavía no hay
    fn directions(&self) -> Option<Self::Directions>;

    /// Registrar un listener para "la ruta cambió"
    fn subscribe_directions_changed(&self, listener: Box<dyn Fn()>) -> Result<(), String>;
}

/// Códigos de estado del servicio de rutas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    NotFound,
    ZeroResults,
    MaxWaypointsExceeded,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
}

impl RouteStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "NOT_FOUND" => RouteStatus::NotFound,
            "ZERO_RESULTS" => RouteStatus::ZeroResults,
            "MAX_WAYPOINTS_EXCEEDED" => RouteStatus::MaxWaypointsExceeded,
            "INVALID_REQUEST" => RouteStatus::InvalidRequest,
            "OVER_QUERY_LIMIT" => RouteStatus::OverQueryLimit,
            "REQUEST_DENIED" => RouteStatus::RequestDenied,
            _ => RouteStatus::UnknownError,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RouteStatus::NotFound => "NOT_FOUND",
            RouteStatus::ZeroResults => "ZERO_RESULTS",
            RouteStatus::MaxWaypointsExceeded => "MAX_WAYPOINTS_EXCEEDED",
            RouteStatus::InvalidRequest => "INVALID_REQUEST",
            RouteStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            RouteStatus::RequestDenied => "REQUEST_DENIED",
            RouteStatus::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

/// Fallo del servicio de rutas (red, ruta no encontrada, lugares inválidos...)
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingFailure {
    pub status: RouteStatus,
    /// Mensaje crudo del servicio
    pub message: String,
}

impl RoutingFailure {
    pub fn new(status: RouteStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Error de red / JS sin código de estado
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(RouteStatus::UnknownError, message)
    }
}

impl std::fmt::Display for RoutingFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.status.code())
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for RoutingFailure {}
