use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_LOCALITY_SUFFIX, DEFAULT_MAP_ELEMENT_ID, DEFAULT_PANEL_ELEMENT_ID,
    DEFAULT_PLACES_STORAGE_KEY, DEFAULT_TOTAL_ELEMENT_ID,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Clave de localStorage con la lista de lugares
    pub places_storage_key: String,
    /// Sufijo agregado a cada lugar (sesgo regional del geocoder)
    pub locality_suffix: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub ui_config: UIConfig,
    pub optimizer_config: OptimizerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            places_storage_key: DEFAULT_PLACES_STORAGE_KEY.to_string(),
            locality_suffix: DEFAULT_LOCALITY_SUFFIX.to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
            ui_config: UIConfig::default(),
            optimizer_config: OptimizerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    /// Permite arrastrar la ruta en el mapa
    pub draggable_route: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Toronto
        Self {
            default_center_lat: 43.6532,
            default_center_lng: -79.3832,
            default_zoom: 4.0,
            draggable_route: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    pub map_element_id: String,
    pub panel_element_id: String,
    pub total_element_id: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            map_element_id: DEFAULT_MAP_ELEMENT_ID.to_string(),
            panel_element_id: DEFAULT_PANEL_ELEMENT_ID.to_string(),
            total_element_id: DEFAULT_TOTAL_ELEMENT_ID.to_string(),
        }
    }
}

/// Algoritmo genético que ordena los waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Peso del puntaje de distancia en el fitness
    pub distance_weight: f64,
    /// Peso del puntaje de seguridad (CSI) en el fitness
    pub safety_weight: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 1000,
            distance_weight: 0.9,
            safety_weight: 0.1,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            places_storage_key: option_env!("PLACES_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.places_storage_key),
            locality_suffix: option_env!("LOCALITY_SUFFIX")
                .map(str::to_string)
                .unwrap_or(defaults.locality_suffix),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            map_config: MapConfig {
                default_center_lat: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LAT"),
                    defaults.map_config.default_center_lat,
                ),
                default_center_lng: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LNG"),
                    defaults.map_config.default_center_lng,
                ),
                default_zoom: parse_or(
                    option_env!("DEFAULT_MAP_ZOOM"),
                    defaults.map_config.default_zoom,
                ),
                draggable_route: parse_or(
                    option_env!("ROUTE_DRAGGABLE"),
                    defaults.map_config.draggable_route,
                ),
            },
            ui_config: UIConfig {
                map_element_id: option_env!("MAP_ELEMENT_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.ui_config.map_element_id),
                panel_element_id: option_env!("PANEL_ELEMENT_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.ui_config.panel_element_id),
                total_element_id: option_env!("TOTAL_ELEMENT_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.ui_config.total_element_id),
            },
            optimizer_config: OptimizerConfig {
                population_size: parse_or(
                    option_env!("OPTIMIZER_POPULATION_SIZE"),
                    defaults.optimizer_config.population_size,
                ),
                generations: parse_or(
                    option_env!("OPTIMIZER_GENERATIONS"),
                    defaults.optimizer_config.generations,
                ),
                distance_weight: parse_or(
                    option_env!("OPTIMIZER_DISTANCE_WEIGHT"),
                    defaults.optimizer_config.distance_weight,
                ),
                safety_weight: parse_or(
                    option_env!("OPTIMIZER_SAFETY_WEIGHT"),
                    defaults.optimizer_config.safety_weight,
                ),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(fallback)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
