use crate::dom;

/// Notificación bloqueante al usuario
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert()`
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        dom::alert(message);
    }
}
