pub mod place_list;
pub mod route;
pub mod stop;

pub use place_list::{PlaceList, PlaceListError};
pub use route::{Distance, Leg, Route, RouteRequest, RouteResult, TravelMode, Waypoint};
pub use stop::Stop;
