// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod route_state;

pub use reactivity::*;
pub use route_state::*;
