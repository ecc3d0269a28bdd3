// ============================================================================
// ROUTE STATE - Total mostrado (sin ruta / ruta con total)
// ============================================================================

use super::Observable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayedTotal {
    NoRoute,
    Route { total_km: f64 },
}

#[derive(Clone)]
pub struct RouteState {
    total: Observable<DisplayedTotal>,
}

impl RouteState {
    pub fn new() -> Self {
        Self {
            total: Observable::new(DisplayedTotal::NoRoute),
        }
    }

    pub fn current(&self) -> DisplayedTotal {
        self.total.get()
    }

    pub fn total_km(&self) -> Option<f64> {
        match self.current() {
            DisplayedTotal::NoRoute => None,
            DisplayedTotal::Route { total_km } => Some(total_km),
        }
    }

    /// Transición incondicional a "ruta con total"
    pub fn show_total(&self, total_km: f64) {
        self.total.set(DisplayedTotal::Route { total_km });
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&DisplayedTotal) + 'static,
    {
        self.total.subscribe(callback);
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}
