// ============================================================================
// ELEMENT HELPERS - Funciones básicas del DOM
// ============================================================================

use web_sys::{Document, Element, Storage, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// localStorage (None si el navegador lo bloquea)
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// alert() bloqueante
pub fn alert(message: &str) {
    if let Some(win) = window() {
        if win.alert_with_message(message).is_err() {
            log::warn!("⚠️ [DOM] alert() falló: {}", message);
        }
    } else {
        log::warn!("⚠️ [DOM] Sin window para alert(): {}", message);
    }
}
