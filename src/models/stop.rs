use serde::{Deserialize, Serialize};

use crate::utils::constants::{CSI_SCORES, DEFAULT_CSI_CITY};

/// Lugar con coordenadas conocidas, entrada del optimizador de orden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Área metropolitana (para el CSI); sin ciudad conocida se usa Toronto
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Stop {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            city: None,
        }
    }

    pub fn in_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Índice de criminalidad de la ciudad del lugar
    pub fn csi(&self) -> f64 {
        let city = self.city.as_deref().unwrap_or(DEFAULT_CSI_CITY);
        csi_for(city).or_else(|| csi_for(DEFAULT_CSI_CITY)).unwrap_or(0.0)
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

fn csi_for(city: &str) -> Option<f64> {
    CSI_SCORES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city))
        .map(|(_, score)| *score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csi_comes_from_city_with_toronto_fallback() {
        assert_eq!(Stop::new("ROM", 43.66, -79.39).csi(), 45.45);
        assert_eq!(Stop::new("Pier", 42.3, -83.0).in_city("Windsor").csi(), 74.84);
        assert_eq!(Stop::new("Pier", 42.3, -83.0).in_city("windsor").csi(), 74.84);
        assert_eq!(Stop::new("Nowhere", 0.0, 0.0).in_city("Atlantis").csi(), 45.45);
    }

    #[test]
    fn parses_stop_json_without_city() {
        let stop: Stop = serde_json::from_str(
            r#"{ "name": "CN Tower", "latitude": 43.6426, "longitude": -79.3871 }"#,
        )
        .unwrap();
        assert_eq!(stop, Stop::new("CN Tower", 43.6426, -79.3871));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(Stop::new("ok", 43.6, -79.3).has_valid_coordinates());
        assert!(!Stop::new("lat", 91.0, 0.0).has_valid_coordinates());
        assert!(!Stop::new("nan", f64::NAN, 0.0).has_valid_coordinates());
    }
}
