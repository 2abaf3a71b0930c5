use crossbeam_channel::{bounded, Receiver, Sender};
use pequod_route_viewer::client::CompletionDisposition;
use pequod_route_viewer::render::{build_guide_lines, build_segment_overlays, SegmentStyle};
use pequod_route_viewer::ui::{format_distance_km, format_minutes};
use pequod_route_viewer::{
    AppCommand, AppController, AppIntent, AppState, GeoPoint, HttpReply, NetworkType,
    OptimizeFor, RequestPhase, RouteClient, RouteError, RouteTransport, SelectionPhase,
    TransportError, ValidationError,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const BASE_URL: &str = "http://pathfinder.test";
const WAIT: Duration = Duration::from_secs(5);

const START: GeoPoint = GeoPoint::new(-22.90, -42.82);
const END: GeoPoint = GeoPoint::new(-22.93, -42.81);

const SINGLE_SEGMENT_BODY: &str = r#"{
    "path_segments": [
        {"coordinates": [{"lat": -22.90, "lon": -42.82}, {"lat": -22.93, "lon": -42.81}]}
    ],
    "total_length_meters": 4200.0,
    "total_time_minutes": 8.1
}"#;

enum Scripted {
    Reply(HttpReply),
    Offline,
    /// Antwortet erst, wenn über den Kanal freigegeben wurde
    Gated(Receiver<()>, HttpReply),
}

/// Transport mit vorbereiteten Antworten; Zuordnung über einen URL-Teilstring,
/// damit parallele Worker-Threads deterministisch bedient werden.
struct ScriptedTransport {
    script: Mutex<Vec<(&'static str, Scripted)>>,
    urls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn with(entries: Vec<(&'static str, Scripted)>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(entries),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("urls lock").clone()
    }
}

impl RouteTransport for ScriptedTransport {
    fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        self.urls.lock().expect("urls lock").push(url.to_string());

        let entry = {
            let mut script = self.script.lock().expect("script lock");
            let position = script.iter().position(|(needle, _)| url.contains(needle));
            position.map(|i| script.remove(i).1)
        };

        match entry {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Gated(release, reply)) => {
                release
                    .recv_timeout(WAIT)
                    .map_err(|_| TransportError::Unavailable("gate never opened".into()))?;
                Ok(reply)
            }
            Some(Scripted::Offline) => Err(TransportError::Unavailable("offline".into())),
            None => Err(TransportError::Unavailable(format!("no scripted reply for {url}"))),
        }
    }
}

fn ok(body: &str) -> HttpReply {
    HttpReply {
        status: 200,
        status_text: "OK".into(),
        body: body.to_string(),
    }
}

fn controller_with(transport: &Arc<ScriptedTransport>) -> AppController {
    AppController::new(RouteClient::new(transport.clone(), BASE_URL))
}

fn gate() -> (Sender<()>, Receiver<()>) {
    bounded(1)
}

fn select_points(controller: &mut AppController, state: &mut AppState) {
    for point in [START, END] {
        controller
            .handle_intent(state, AppIntent::MapClicked { point })
            .expect("MapClicked sollte ohne Fehler durchlaufen");
    }
}

fn submit(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::RouteSubmitRequested)
        .expect("RouteSubmitRequested sollte ohne Fehler durchlaufen");
}

#[test]
fn test_single_segment_route_is_requested_and_rendered() {
    let transport = ScriptedTransport::with(vec![(
        "/drive/?",
        Scripted::Reply(ok(SINGLE_SEGMENT_BODY)),
    )]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptimizeForChanged {
                optimize_for: OptimizeFor::Time,
            },
        )
        .expect("OptimizeForChanged sollte ohne Fehler durchlaufen");
    submit(&mut controller, &mut state);

    assert_eq!(state.request.phase(), RequestPhase::Loading);
    assert_eq!(
        controller.wait_for_route_response(&mut state, WAIT),
        Some(CompletionDisposition::Applied)
    );
    assert_eq!(state.request.phase(), RequestPhase::Success);
    assert!(state.ui.status_message.is_none());

    let urls = transport.urls();
    assert_eq!(urls.len(), 1);
    let url = &urls[0];
    assert!(url.starts_with("http://pathfinder.test/pathfinder/drive/?"), "{url}");
    assert!(url.contains("start_lat=-22.9000000&start_lon=-42.8200000"), "{url}");
    assert!(url.contains("end_lat=-22.9300000&end_lon=-42.8100000"), "{url}");
    assert!(url.contains("optimize_for=time"), "{url}");
    assert!(!url.contains("average_speed_kmh"), "{url}");

    let result = state.request.result().expect("Ergebnis erwartet").clone();
    let overlays = build_segment_overlays(Some(&result));
    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0].style, SegmentStyle::Normal);
    assert!(overlays[0].popup.is_none());

    // Klickpunkte fallen mit den Routen-Endpunkten zusammen
    assert!(build_guide_lines(&state.selection, Some(&result)).is_empty());

    assert_eq!(format_distance_km(result.total_length_meters()), "4.20 km");
    assert_eq!(format_minutes(result.total_time_minutes()), "8.1 minutes");

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    assert!(scene.has_route());
}

#[test]
fn test_submit_with_only_start_is_rejected_without_network() {
    let transport = ScriptedTransport::with(Vec::new());
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::MapClicked { point: START })
        .expect("MapClicked sollte ohne Fehler durchlaufen");
    submit(&mut controller, &mut state);

    assert_eq!(state.request.phase(), RequestPhase::Failed);
    assert_eq!(
        state.request.last_error(),
        Some(&RouteError::Validation(ValidationError::MissingEnd))
    );
    assert_eq!(state.selection.phase(), SelectionPhase::StartSet);
    assert_eq!(state.command_log.submitted_route_count(), 0);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RejectRouteRequest { .. })
    ));
    assert!(transport.urls().is_empty());
}

#[test]
fn test_completing_selection_after_rejected_submit_clears_error() {
    let transport = ScriptedTransport::with(Vec::new());
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::MapClicked { point: START })
        .expect("MapClicked sollte ohne Fehler durchlaufen");
    submit(&mut controller, &mut state);
    assert_eq!(state.request.phase(), RequestPhase::Failed);

    controller
        .handle_intent(&mut state, AppIntent::MapClicked { point: END })
        .expect("MapClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.selection.phase(), SelectionPhase::BothSet);
    assert_eq!(state.request.phase(), RequestPhase::Idle);
    assert!(state.request.last_error().is_none());
}

#[test]
fn test_invalid_speed_text_is_rejected_on_submit() {
    let transport = ScriptedTransport::with(Vec::new());
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::AverageSpeedInputChanged { text: "-5".into() },
        )
        .expect("AverageSpeedInputChanged sollte ohne Fehler durchlaufen");
    assert!(state.ui.average_speed_invalid);

    submit(&mut controller, &mut state);

    assert_eq!(state.request.phase(), RequestPhase::Failed);
    assert!(matches!(
        state.request.last_error(),
        Some(RouteError::Validation(ValidationError::InvalidAverageSpeed(_)))
    ));
    assert!(transport.urls().is_empty());
}

#[test]
fn test_speed_and_network_are_sent_when_set() {
    let transport = ScriptedTransport::with(vec![(
        "/bike/?",
        Scripted::Reply(ok(SINGLE_SEGMENT_BODY)),
    )]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    for intent in [
        AppIntent::NetworkTypeChanged {
            network_type: NetworkType::Bike,
        },
        AppIntent::AverageSpeedInputChanged { text: "18".into() },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Optionen sollten ohne Fehler übernommen werden");
    }
    submit(&mut controller, &mut state);

    assert_eq!(
        controller.wait_for_route_response(&mut state, WAIT),
        Some(CompletionDisposition::Applied)
    );
    let urls = transport.urls();
    assert!(urls[0].contains("/pathfinder/bike/?"), "{}", urls[0]);
    assert!(urls[0].ends_with("optimize_for=length&average_speed_kmh=18"), "{}", urls[0]);
}

#[test]
fn test_empty_path_shows_no_path_found() {
    let body = r#"{"path_segments": [], "total_length_meters": 0.0, "total_time_minutes": 0.0}"#;
    let transport = ScriptedTransport::with(vec![("/drive/?", Scripted::Reply(ok(body)))]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    submit(&mut controller, &mut state);
    controller.wait_for_route_response(&mut state, WAIT);

    assert_eq!(state.request.phase(), RequestPhase::Failed);
    assert_eq!(
        state.request.last_error(),
        Some(&RouteError::EmptyResult("No path found.".into()))
    );
    assert!(state.request.result().is_none());
}

#[test]
fn test_api_error_message_is_taken_from_body() {
    let reply = HttpReply {
        status: 503,
        status_text: "Service Unavailable".into(),
        body: r#"{"error": "Graph not loaded"}"#.into(),
    };
    let transport = ScriptedTransport::with(vec![("/drive/?", Scripted::Reply(reply))]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    submit(&mut controller, &mut state);
    controller.wait_for_route_response(&mut state, WAIT);

    assert_eq!(
        state.request.last_error(),
        Some(&RouteError::Api("Graph not loaded".into()))
    );
}

#[test]
fn test_unreachable_service_reports_connectivity_error() {
    let transport = ScriptedTransport::with(vec![("/drive/?", Scripted::Offline)]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    submit(&mut controller, &mut state);
    controller.wait_for_route_response(&mut state, WAIT);

    let error = state.request.last_error().expect("Fehler erwartet");
    assert_eq!(error.kind(), "transport");
    assert!(error.to_string().contains("Could not reach the routing service"));
}

#[test]
fn test_affected_segment_is_styled_and_carries_condition() {
    let body = r#"{
        "path_segments": [
            {"coordinates": [{"lat": -22.90, "lon": -42.82}, {"lat": -22.91, "lon": -42.815}]},
            {
                "coordinates": [{"lat": -22.91, "lon": -42.815}, {"lat": -22.93, "lon": -42.81}],
                "applied_condition": {"description": "Flooded road"}
            }
        ],
        "total_length_meters": 4200.0,
        "total_time_minutes": 12.0
    }"#;
    let transport = ScriptedTransport::with(vec![("/drive/?", Scripted::Reply(ok(body)))]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    submit(&mut controller, &mut state);
    controller.wait_for_route_response(&mut state, WAIT);

    let result = state.request.result().expect("Ergebnis erwartet").clone();
    assert_eq!(result.affected_segment_count(), 1);

    let overlays = build_segment_overlays(Some(&result));
    let styles: Vec<SegmentStyle> = overlays.iter().map(|o| o.style).collect();
    assert_eq!(styles, vec![SegmentStyle::Normal, SegmentStyle::Affected]);
    assert_eq!(overlays[1].popup, Some("Flooded road"));
}

#[test]
fn test_clear_during_loading_discards_late_response() {
    let (release, gate_rx) = gate();
    let transport = ScriptedTransport::with(vec![(
        "/drive/?",
        Scripted::Gated(gate_rx, ok(SINGLE_SEGMENT_BODY)),
    )]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    submit(&mut controller, &mut state);
    assert!(state.request.is_loading());

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .expect("ClearRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.request.phase(), RequestPhase::Idle);
    assert_eq!(state.selection.phase(), SelectionPhase::Empty);
    assert!(state.ui.status_message.is_none());

    release.send(()).expect("Gate freigeben");
    assert_eq!(
        controller.wait_for_route_response(&mut state, WAIT),
        Some(CompletionDisposition::Stale)
    );
    assert_eq!(state.request.phase(), RequestPhase::Idle);
    assert!(state.request.result().is_none());
}

#[test]
fn test_newer_request_wins_over_slower_older_one() {
    let (release_first, first_gate) = gate();
    let second_body = r#"{
        "path_segments": [{"coordinates": [{"lat": -22.90, "lon": -42.82}, {"lat": -22.93, "lon": -42.81}]}],
        "total_length_meters": 3900.0,
        "total_time_minutes": 7.0
    }"#;
    let transport = ScriptedTransport::with(vec![
        (
            "optimize_for=length",
            Scripted::Gated(first_gate, ok(SINGLE_SEGMENT_BODY)),
        ),
        ("optimize_for=time", Scripted::Reply(ok(second_body))),
    ]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    submit(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptimizeForChanged {
                optimize_for: OptimizeFor::Time,
            },
        )
        .expect("OptimizeForChanged sollte ohne Fehler durchlaufen");
    submit(&mut controller, &mut state);

    assert_eq!(
        controller.wait_for_route_response(&mut state, WAIT),
        Some(CompletionDisposition::Applied)
    );
    release_first.send(()).expect("Gate freigeben");
    assert_eq!(
        controller.wait_for_route_response(&mut state, WAIT),
        Some(CompletionDisposition::Stale)
    );

    let result = state.request.result().expect("Ergebnis erwartet");
    assert_eq!(result.total_length_meters(), 3900.0);
    assert_eq!(state.command_log.submitted_route_count(), 2);
}

#[test]
fn test_third_click_during_loading_invalidates_request() {
    let (release, gate_rx) = gate();
    let transport = ScriptedTransport::with(vec![(
        "/drive/?",
        Scripted::Gated(gate_rx, ok(SINGLE_SEGMENT_BODY)),
    )]);
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    select_points(&mut controller, &mut state);
    submit(&mut controller, &mut state);

    let third = GeoPoint::new(-22.95, -42.80);
    controller
        .handle_intent(&mut state, AppIntent::MapClicked { point: third })
        .expect("MapClicked sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.start(), Some(third));
    assert_eq!(state.selection.end(), None);
    assert_eq!(state.request.phase(), RequestPhase::Idle);
    assert!(state.ui.status_message.is_none());

    release.send(()).expect("Gate freigeben");
    assert_eq!(
        controller.wait_for_route_response(&mut state, WAIT),
        Some(CompletionDisposition::Stale)
    );
    assert!(state.request.result().is_none());
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let transport = ScriptedTransport::with(Vec::new());
    let mut controller = controller_with(&transport);
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
}
