use wasm_bindgen::JsValue;

use crate::models::PlaceListError;

/// Errores de inicialización (antes de pedir la ruta)
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    StorageUnavailable,
    MissingPlaces { key: String },
    InvalidPlaces(PlaceListError),
    MissingElement { id: String },
    MapUnavailable(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::StorageUnavailable => write!(f, "localStorage is not available"),
            AppError::MissingPlaces { key } => {
                write!(f, "No places stored under localStorage key \"{}\"", key)
            }
            AppError::InvalidPlaces(e) => write!(f, "Invalid place list: {}", e),
            AppError::MissingElement { id } => write!(f, "No #{} element found", id),
            AppError::MapUnavailable(msg) => write!(f, "Google Maps is not available: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::InvalidPlaces(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlaceListError> for AppError {
    fn from(e: PlaceListError) -> Self {
        AppError::InvalidPlaces(e)
    }
}

impl From<AppError> for JsValue {
    fn from(e: AppError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
