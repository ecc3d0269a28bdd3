// ============================================================================
// VIEWS - Salidas visibles para el usuario (texto del total, alerts)
// ============================================================================

pub mod total_view;
pub mod alert_view;

pub use total_view::*;
pub use alert_view::*;
