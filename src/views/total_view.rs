// ============================================================================
// TOTAL VIEW - Escribe "<n> km" en el nodo de texto del total
// ============================================================================

use std::rc::Rc;

use web_sys::Element;

use crate::dom::{get_element_by_id, set_text_content};
use crate::error::AppError;
use crate::state::{DisplayedTotal, RouteState};
use crate::viewmodels::DistanceViewModel;

/// Lugar donde se muestra el total
pub trait TotalOutput {
    fn write_total(&self, text: &str);
}

/// Nodo del DOM (`#total` por defecto)
pub struct DomTotalOutput {
    element: Element,
}

impl DomTotalOutput {
    pub fn from_id(id: &str) -> Result<Self, AppError> {
        let element = get_element_by_id(id).ok_or_else(|| AppError::MissingElement { id: id.to_string() })?;
        Ok(Self { element })
    }
}

impl TotalOutput for DomTotalOutput {
    fn write_total(&self, text: &str) {
        set_text_content(&self.element, text);
    }
}

/// Conectar el estado al output: cada total publicado se reescribe completo
pub fn bind_total_view(state: &RouteState, output: Rc<dyn TotalOutput>) {
    state.subscribe(move |total| match total {
        DisplayedTotal::Route { total_km } => {
            output.write_total(&DistanceViewModel::format_total(*total_km));
        }
        // No hay transición de vuelta a "sin ruta"
        DisplayedTotal::NoRoute => {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOutput {
        texts: RefCell<Vec<String>>,
    }

    impl TotalOutput for RecordingOutput {
        fn write_total(&self, text: &str) {
            self.texts.borrow_mut().push(text.to_string());
        }
    }

    #[test]
    fn writes_formatted_total_on_each_transition() {
        let state = RouteState::new();
        let output = Rc::new(RecordingOutput::default());
        bind_total_view(&state, output.clone());

        assert!(output.texts.borrow().is_empty());
        state.show_total(4.0);
        state.show_total(1.5);
        assert_eq!(*output.texts.borrow(), ["4 km", "1.5 km"]);
    }
}
