/// Valores por defecto de la página (sobrescribibles vía .env, ver `AppConfig::from_env`)
pub const DEFAULT_PLACES_STORAGE_KEY: &str = "locations";
pub const DEFAULT_LOCALITY_SUFFIX: &str = "toronto";

pub const DEFAULT_MAP_ELEMENT_ID: &str = "map";
pub const DEFAULT_PANEL_ELEMENT_ID: &str = "panel";
pub const DEFAULT_TOTAL_ELEMENT_ID: &str = "total";

/// Separador de la lista de lugares guardada en storage
pub const PLACE_SEPARATOR: char = ',';

/// Evento del DirectionsRenderer cuando el usuario arrastra la ruta
pub const DIRECTIONS_CHANGED_EVENT: &str = "directions_changed";

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const DISTANCE_UNIT_SUFFIX: &str = " km";

/// Prefijo del alert cuando falla el servicio de rutas
pub const ROUTE_FAILURE_ALERT_PREFIX: &str = "Could not display directions due to: ";

/// Índice de gravedad del crimen (CSI) por área metropolitana de Ontario
pub const CSI_SCORES: &[(&str, f64)] = &[
    ("Toronto", 45.45),
    ("Barrie", 45.91),
    ("Ottawa-Gatineau", 49.23),
    ("Hamilton", 56.85),
    ("Guelph", 58.22),
    ("St.Catherines-Niagra", 62.12),
    ("Peterborough", 64.8),
    ("Belleville", 69.33),
    ("Kingston", 72.78),
    ("Windsor", 74.84),
    ("Brantford", 75.71),
    ("Kitchner-Cambridge-Waterloo", 79.39),
    ("London", 80.09),
    ("Greater Sudbury", 84.39),
    ("Thunder Bay", 101.31),
];

/// Ciudad usada cuando un lugar no trae una ciudad conocida
pub const DEFAULT_CSI_CITY: &str = "Toronto";
