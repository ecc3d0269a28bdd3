// ============================================================================
// VIEWMODELS - Lógica sin DOM
// ============================================================================

pub mod route_viewmodel;
pub mod distance_viewmodel;

pub use route_viewmodel::RouteViewModel;
pub use distance_viewmodel::DistanceViewModel;
