// ============================================================================
// APP - Inicialización explícita con colaboradores inyectados
// ============================================================================
// Storage, servicio de rutas, mapa y salidas llegan como parámetros:
// en el navegador son Google Maps + DOM (ver lib.rs), en tests son fakes.
// ============================================================================

use std::rc::{Rc, Weak};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::maps::{RouteDisplay, RoutingFailure, RoutingService};
use crate::models::RouteRequest;
use crate::services::{PlaceService, PlaceSource};
use crate::state::RouteState;
use crate::viewmodels::{DistanceViewModel, RouteViewModel};
use crate::views::{bind_total_view, Notifier, TotalOutput};

/// Aplicación principal
pub struct App<S, D>
where
    S: RoutingService,
    D: RouteDisplay<Directions = S::Directions> + 'static,
{
    service: S,
    display: Rc<D>,
    notifier: Rc<dyn Notifier>,
    state: RouteState,
    request: RouteRequest,
}

impl<S, D> App<S, D>
where
    S: RoutingService,
    D: RouteDisplay<Directions = S::Directions> + 'static,
{
    /// Leer lugares, conectar la vista del total y escuchar cambios de ruta.
    /// No pide la ruta todavía: eso es `start()`.
    pub fn new(
        config: &AppConfig,
        places: &dyn PlaceSource,
        service: S,
        display: Rc<D>,
        notifier: Rc<dyn Notifier>,
        output: Rc<dyn TotalOutput>,
    ) -> Result<Self, AppError> {
        let place_list = PlaceService::load(places, &config.places_storage_key)?;
        let request = RouteViewModel::build_request(&place_list, &config.locality_suffix);

        let state = RouteState::new();
        bind_total_view(&state, output);

        // Weak: el listener vive dentro del propio display
        let weak_display: Weak<D> = Rc::downgrade(&display);
        let listener_state = state.clone();
        display
            .subscribe_directions_changed(Box::new(move || {
                if let Some(display) = weak_display.upgrade() {
                    DistanceViewModel::compute_total_distance(display.directions().as_ref(), &listener_state);
                }
            }))
            .map_err(AppError::MapUnavailable)?;

        // Si el widget ya tiene una ruta, mostrar su total desde el inicio
        DistanceViewModel::compute_total_distance(display.directions().as_ref(), &state);

        log::info!("✅ [APP] Inicializada: {} → {} ({} waypoints)",
                   request.origin, request.destination, request.waypoints.len());

        Ok(Self {
            service,
            display,
            notifier,
            state,
            request,
        })
    }

    /// Pedir la ruta (una sola vez) y entregarla al mapa
    pub async fn start(&self) -> Result<(), RoutingFailure> {
        RouteViewModel::display_route(&self.service, self.display.as_ref(), self.notifier.as_ref(), &self.request).await
    }

    pub fn request(&self) -> &RouteRequest {
        &self.request
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    use crate::maps::RouteStatus;
    use crate::models::{Leg, PlaceListError, Route, RouteResult, Waypoint};
    use crate::state::DisplayedTotal;

    // ------------------------------------------------------------------
    // Fakes
    // ------------------------------------------------------------------

    struct MemoryPlaces(HashMap<String, String>);

    impl PlaceSource for MemoryPlaces {
        fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.0.get(key).cloned())
        }
    }

    struct FakeService {
        outcome: Result<RouteResult, RoutingFailure>,
        requests: RefCell<Vec<RouteRequest>>,
    }

    #[async_trait(?Send)]
    impl RoutingService for FakeService {
        type Directions = RouteResult;

        async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingFailure> {
            self.requests.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    /// Imita al DirectionsRenderer: setDirections dispara "directions_changed"
    #[derive(Default)]
    struct FakeDisplay {
        current: RefCell<Option<RouteResult>>,
        listeners: RefCell<Vec<Box<dyn Fn()>>>,
    }

    impl FakeDisplay {
        fn with_route(result: RouteResult) -> Self {
            Self {
                current: RefCell::new(Some(result)),
                ..Self::default()
            }
        }

        /// El usuario arrastra la ruta (o el widget la borra con `None`)
        fn user_edit(&self, result: Option<RouteResult>) {
            *self.current.borrow_mut() = result;
            self.fire();
        }

        fn fire(&self) {
            for listener in self.listeners.borrow().iter() {
                listener();
            }
        }
    }

    impl RouteDisplay for FakeDisplay {
        type Directions = RouteResult;

        fn set_directions(&self, directions: &RouteResult) {
            *self.current.borrow_mut() = Some(directions.clone());
            self.fire();
        }

        fn directions(&self) -> Option<RouteResult> {
            self.current.borrow().clone()
        }

        fn subscribe_directions_changed(&self, listener: Box<dyn Fn()>) -> Result<(), String> {
            self.listeners.borrow_mut().push(listener);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingOutput {
        texts: RefCell<Vec<String>>,
    }

    impl RecordingOutput {
        fn last(&self) -> Option<String> {
            self.texts.borrow().last().cloned()
        }
    }

    impl TotalOutput for RecordingOutput {
        fn write_total(&self, text: &str) {
            self.texts.borrow_mut().push(text.to_string());
        }
    }

    fn legs(meters: &[f64]) -> RouteResult {
        RouteResult {
            routes: vec![Route { legs: meters.iter().copied().map(Leg::meters).collect() }],
        }
    }

    struct Harness {
        app: App<FakeService, FakeDisplay>,
        display: Rc<FakeDisplay>,
        notifier: Rc<RecordingNotifier>,
        output: Rc<RecordingOutput>,
    }

    fn harness(
        stored: &str,
        outcome: Result<RouteResult, RoutingFailure>,
        display: FakeDisplay,
    ) -> Result<Harness, AppError> {
        harness_with(&AppConfig::default(), stored, outcome, display)
    }

    fn harness_with(
        config: &AppConfig,
        stored: &str,
        outcome: Result<RouteResult, RoutingFailure>,
        display: FakeDisplay,
    ) -> Result<Harness, AppError> {
        let places = MemoryPlaces(HashMap::from([(config.places_storage_key.clone(), stored.to_string())]));
        let service = FakeService {
            outcome,
            requests: RefCell::new(Vec::new()),
        };
        let display = Rc::new(display);
        let notifier = Rc::new(RecordingNotifier::default());
        let output = Rc::new(RecordingOutput::default());
        let app = App::new(config, &places, service, display.clone(), notifier.clone(), output.clone())?;
        Ok(Harness { app, display, notifier, output })
    }

    // ------------------------------------------------------------------
    // Tests
    // ------------------------------------------------------------------

    #[test]
    fn request_is_built_from_stored_places() {
        let h = harness(
            "CN Tower,Royal Ontario Museum,Distillery District",
            Ok(legs(&[])),
            FakeDisplay::default(),
        )
        .unwrap();

        block_on(h.app.start()).unwrap();

        let requests = h.app.service.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].origin, "CN Tower toronto");
        assert_eq!(requests[0].destination, "Distillery District toronto");
        assert_eq!(
            requests[0].waypoints,
            vec![Waypoint { location: "Royal Ontario Museum toronto".to_string() }]
        );
        assert_eq!(h.app.request(), &requests[0]);
    }

    #[test]
    fn successful_route_is_displayed_and_totalled() {
        let h = harness("a,b,c,d", Ok(legs(&[500.0, 1500.0, 2000.0])), FakeDisplay::default()).unwrap();
        assert_eq!(h.output.last(), None);

        block_on(h.app.start()).unwrap();

        assert_eq!(h.display.directions(), Some(legs(&[500.0, 1500.0, 2000.0])));
        assert_eq!(h.output.last().as_deref(), Some("4 km"));
        assert_eq!(h.app.state().current(), DisplayedTotal::Route { total_km: 4.0 });
        assert!(h.notifier.messages.borrow().is_empty());
    }

    #[test]
    fn route_without_legs_shows_zero() {
        let h = harness("a,b", Ok(legs(&[])), FakeDisplay::default()).unwrap();
        block_on(h.app.start()).unwrap();
        assert_eq!(h.output.last().as_deref(), Some("0 km"));
    }

    #[test]
    fn existing_route_is_totalled_on_init() {
        let h = harness("a,b", Ok(legs(&[])), FakeDisplay::with_route(legs(&[250.0, 750.0]))).unwrap();
        assert_eq!(h.output.last().as_deref(), Some("1 km"));
    }

    #[test]
    fn routing_failure_alerts_once_and_keeps_total() {
        let failure = RoutingFailure::new(RouteStatus::ZeroResults, "DIRECTIONS_ROUTE: ZERO_RESULTS");
        let h = harness("a,b", Err(failure.clone()), FakeDisplay::with_route(legs(&[1000.0]))).unwrap();
        assert_eq!(h.output.last().as_deref(), Some("1 km"));

        assert_eq!(block_on(h.app.start()), Err(failure));

        assert_eq!(
            *h.notifier.messages.borrow(),
            ["Could not display directions due to: DIRECTIONS_ROUTE: ZERO_RESULTS"]
        );
        assert_eq!(*h.output.texts.borrow(), ["1 km"]);
        assert_eq!(h.app.state().total_km(), Some(1.0));
    }

    #[test]
    fn user_edits_recompute_from_scratch() {
        let h = harness("a,b,c", Ok(legs(&[1000.0, 1000.0])), FakeDisplay::default()).unwrap();
        block_on(h.app.start()).unwrap();
        assert_eq!(h.output.last().as_deref(), Some("2 km"));

        h.display.user_edit(Some(legs(&[1200.0, 1300.0])));
        assert_eq!(h.output.last().as_deref(), Some("2.5 km"));

        h.display.user_edit(Some(legs(&[1200.0, 1300.0])));
        assert_eq!(*h.output.texts.borrow(), ["2 km", "2.5 km", "2.5 km"]);
    }

    #[test]
    fn absent_route_after_change_is_ignored() {
        let h = harness("a,b", Ok(legs(&[3000.0])), FakeDisplay::default()).unwrap();
        block_on(h.app.start()).unwrap();

        h.display.user_edit(None);
        h.display.user_edit(Some(RouteResult::default()));

        assert_eq!(*h.output.texts.borrow(), ["3 km"]);
        assert!(h.notifier.messages.borrow().is_empty());
    }

    #[test]
    fn locality_suffix_is_configurable() {
        let config = AppConfig {
            locality_suffix: "montreal".to_string(),
            places_storage_key: "stops".to_string(),
            ..AppConfig::default()
        };
        let h = harness_with(&config, "Old Port,Mount Royal", Ok(legs(&[])), FakeDisplay::default()).unwrap();
        assert_eq!(h.app.request().origin, "Old Port montreal");
        assert_eq!(h.app.request().destination, "Mount Royal montreal");
    }

    #[test]
    fn invalid_places_fail_before_any_request() {
        let err = harness("CN Tower", Ok(legs(&[])), FakeDisplay::default()).err();
        assert_eq!(err, Some(AppError::InvalidPlaces(PlaceListError::TooFewPlaces { found: 1 })));

        let err = harness("", Ok(legs(&[])), FakeDisplay::default()).err();
        assert_eq!(err, Some(AppError::InvalidPlaces(PlaceListError::TooFewPlaces { found: 0 })));
    }
}
