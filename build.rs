use std::env;
use std::fs;
use std::path::Path;

/// Claves que `AppConfig::from_env` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "PLACES_STORAGE_KEY",
    "LOCALITY_SUFFIX",
    "MAP_ELEMENT_ID",
    "PANEL_ELEMENT_ID",
    "TOTAL_ELEMENT_ID",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "ROUTE_DRAGGABLE",
    "ENABLE_LOGGING",
    "OPTIMIZER_POPULATION_SIZE",
    "OPTIMIZER_GENERATIONS",
    "OPTIMIZER_DISTANCE_WEIGHT",
    "OPTIMIZER_SAFETY_WEIGHT",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        // Sin .env se usan los valores por defecto de AppConfig
        Err(_) => return,
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Línea ignorada en .env: {}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // Las variables del entorno real tienen prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
