pub mod place_service;
pub mod optimization_service;

pub use place_service::*;
pub use optimization_service::*;
