use crate::utils::constants::PLACE_SEPARATOR;

/// Lista ordenada de lugares: el primero es el origen, el último el destino
/// y los intermedios son waypoints (en orden).
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceList {
    places: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaceListError {
    /// Se necesitan al menos origen y destino
    TooFewPlaces { found: usize },
    /// Entrada vacía (p.ej. "CN Tower,,Distillery District")
    EmptyEntry { index: usize },
}

impl std::fmt::Display for PlaceListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceListError::TooFewPlaces { found } => write!(
                f,
                "At least two places are required (origin and destination), found {}",
                found
            ),
            PlaceListError::EmptyEntry { index } => {
                write!(f, "Place #{} is empty", index + 1)
            }
        }
    }
}

impl std::error::Error for PlaceListError {}

impl PlaceList {
    /// Parsear el string guardado en storage ("A,B,C")
    pub fn parse(raw: &str) -> Result<Self, PlaceListError> {
        // Un string vacío no es "una entrada vacía", es una lista sin lugares
        if raw.trim().is_empty() {
            return Err(PlaceListError::TooFewPlaces { found: 0 });
        }

        let places = raw
            .split(PLACE_SEPARATOR)
            .map(str::trim)
            .enumerate()
            .map(|(index, place)| {
                if place.is_empty() {
                    Err(PlaceListError::EmptyEntry { index })
                } else {
                    Ok(place.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(places)
    }

    pub fn new(places: Vec<String>) -> Result<Self, PlaceListError> {
        if places.len() < 2 {
            return Err(PlaceListError::TooFewPlaces { found: places.len() });
        }
        if let Some(index) = places.iter().position(|p| p.trim().is_empty()) {
            return Err(PlaceListError::EmptyEntry { index });
        }
        Ok(Self { places })
    }

    pub fn origin(&self) -> &str {
        &self.places[0]
    }

    pub fn destination(&self) -> &str {
        &self.places[self.places.len() - 1]
    }

    /// Lugares estrictamente entre origen y destino
    pub fn waypoints(&self) -> &[String] {
        &self.places[1..self.places.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_origin_waypoints_destination() {
        let list = PlaceList::parse("CN Tower,Royal Ontario Museum,Distillery District").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.origin(), "CN Tower");
        assert_eq!(list.destination(), "Distillery District");
        assert_eq!(list.waypoints(), &["Royal Ontario Museum".to_string()]);
    }

    #[test]
    fn two_places_have_no_waypoints() {
        let list = PlaceList::parse("Union Station,High Park").unwrap();
        assert!(list.waypoints().is_empty());
    }

    #[test]
    fn entries_are_trimmed() {
        let list = PlaceList::parse(" CN Tower , Casa Loma ").unwrap();
        assert_eq!(list.origin(), "CN Tower");
        assert_eq!(list.destination(), "Casa Loma");
    }

    #[test]
    fn empty_and_single_lists_are_rejected() {
        assert_eq!(PlaceList::parse(""), Err(PlaceListError::TooFewPlaces { found: 0 }));
        assert_eq!(PlaceList::parse("   "), Err(PlaceListError::TooFewPlaces { found: 0 }));
        assert_eq!(
            PlaceList::parse("CN Tower"),
            Err(PlaceListError::TooFewPlaces { found: 1 })
        );
    }

    #[test]
    fn empty_entries_are_rejected_with_position() {
        assert_eq!(
            PlaceList::parse("CN Tower,,Casa Loma"),
            Err(PlaceListError::EmptyEntry { index: 1 })
        );
        assert_eq!(
            PlaceList::parse("CN Tower,"),
            Err(PlaceListError::EmptyEntry { index: 1 })
        );
        assert_eq!(
            PlaceList::new(vec!["a".into(), " ".into()]),
            Err(PlaceListError::EmptyEntry { index: 1 })
        );
    }

    #[test]
    fn errors_are_descriptive() {
        let msg = PlaceListError::TooFewPlaces { found: 1 }.to_string();
        assert!(msg.contains("found 1"));
        assert_eq!(PlaceListError::EmptyEntry { index: 0 }.to_string(), "Place #1 is empty");
    }
}
