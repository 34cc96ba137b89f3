//! Request/render cycle for mood submissions.
//!
//! The controller owns the only mutable page state (the last accepted entry, the
//! loading flag and the request counter) and talks to the outside world through
//! two seams: a [`PlaylistTransport`] for the network call and a [`PlaylistView`]
//! for everything the user sees.
//!
//! Every cycle is tagged with a monotonically increasing request id. When a
//! response arrives for an id that is no longer the latest, it is dropped without
//! touching the view, so overlapping submissions resolve as "last issued wins"
//! regardless of which response lands first.

mod view;

pub use view::PlaylistView;

use crate::api::{PlaylistError, PlaylistRequest, PlaylistTransport};
use crate::components::view_models::{
    track_cards, ControlState, MoodCardModel, ANALYZING_HINT, SUCCESS_HINT,
};
use crate::diagnostics::{log_request_timing, now_millis};
use dioxus::logger::tracing::{debug, info, warn};
use std::cell::RefCell;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    /// Empty until the first successful submission.
    pub last_submitted_text: String,
    pub is_loading: bool,
    pub latest_request_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rendered { request_id: u64, track_count: usize },
    Failed { request_id: u64, error: PlaylistError },
    /// Pre-flight validation failed; no request was issued.
    Rejected(PlaylistError),
    /// A newer request was issued while this one was in flight.
    Superseded { request_id: u64 },
    /// Refresh with nothing submitted yet.
    Skipped,
}

pub struct PlaylistRequestController<T, V> {
    transport: T,
    view: V,
    playlist_limit: Option<u32>,
    state: RefCell<ControllerState>,
}

impl<T, V> PlaylistRequestController<T, V>
where
    T: PlaylistTransport,
    V: PlaylistView,
{
    pub fn new(transport: T, view: V, playlist_limit: Option<u32>) -> Self {
        Self {
            transport,
            view,
            playlist_limit,
            state: RefCell::new(ControllerState::default()),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let entry = text.trim();
        if entry.is_empty() {
            let error = PlaylistError::Validation;
            self.view.set_hint(&error.hint());
            return SubmitOutcome::Rejected(error);
        }

        self.run_cycle(entry.to_string()).await
    }

    /// Re-runs the last accepted entry verbatim. No-op before the first success.
    pub async fn refresh(&self) -> SubmitOutcome {
        let entry = self.state.borrow().last_submitted_text.clone();
        if entry.is_empty() {
            debug!("refresh requested before any successful submission");
            return SubmitOutcome::Skipped;
        }

        self.run_cycle(entry).await
    }

    fn begin_request(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.latest_request_id += 1;
        state.is_loading = true;
        state.latest_request_id
    }

    fn is_latest(&self, request_id: u64) -> bool {
        self.state.borrow().latest_request_id == request_id
    }

    async fn run_cycle(&self, entry: String) -> SubmitOutcome {
        let request_id = self.begin_request();
        self.view.set_controls(ControlState::for_loading(true));
        self.view.set_hint(ANALYZING_HINT);

        let request = PlaylistRequest::new(entry, self.playlist_limit);
        let started_at = now_millis();
        let result = self.transport.generate_playlist(&request).await;
        log_request_timing(
            "generate_playlist",
            started_at,
            &format!("request #{request_id}"),
        );

        if !self.is_latest(request_id) {
            info!(request_id, "discarding superseded playlist response");
            return SubmitOutcome::Superseded { request_id };
        }

        let outcome = match result {
            Ok(response) => {
                self.state.borrow_mut().last_submitted_text = request.text;
                let track_count = response.tracks.len();

                self.view.replace_tracks(track_cards(&response.tracks));
                self.view
                    .show_mood(MoodCardModel::new(&response.mood, response.timestamp));
                let hint = response
                    .warning
                    .as_deref()
                    .filter(|warning| !warning.is_empty())
                    .unwrap_or(SUCCESS_HINT);
                self.view.set_hint(hint);
                self.view.reveal_refresh();

                info!(request_id, track_count, mood = %response.mood.label, "playlist rendered");
                SubmitOutcome::Rendered {
                    request_id,
                    track_count,
                }
            }
            Err(error) => {
                warn!(request_id, %error, "playlist request failed");
                self.view.set_hint(&error.hint());
                SubmitOutcome::Failed { request_id, error }
            }
        };

        self.state.borrow_mut().is_loading = false;
        self.view.set_controls(ControlState::for_loading(false));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MoodAnalysis, PlaylistResponse, Track, DEFAULT_FAILURE_HINT, VALIDATION_HINT};
    use crate::components::view_models::{PreviewSlot, TrackCardModel};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, VecDeque};
    use tokio::sync::oneshot;

    #[derive(Default)]
    struct RecordingView {
        hint: RefCell<String>,
        controls: Cell<Option<ControlState>>,
        cards: RefCell<Vec<TrackCardModel>>,
        mood: RefCell<Option<MoodCardModel>>,
        refresh_visible: Cell<bool>,
        calls: Cell<usize>,
        replace_calls: Cell<usize>,
    }

    impl RecordingView {
        fn bump(&self) {
            self.calls.set(self.calls.get() + 1);
        }

        fn hint(&self) -> String {
            self.hint.borrow().clone()
        }

        fn titles(&self) -> Vec<String> {
            self.cards.borrow().iter().map(|c| c.title.clone()).collect()
        }
    }

    impl PlaylistView for RecordingView {
        fn set_hint(&self, hint: &str) {
            self.bump();
            *self.hint.borrow_mut() = hint.to_string();
        }

        fn set_controls(&self, controls: ControlState) {
            self.bump();
            self.controls.set(Some(controls));
        }

        fn replace_tracks(&self, cards: Vec<TrackCardModel>) {
            self.bump();
            self.replace_calls.set(self.replace_calls.get() + 1);
            *self.cards.borrow_mut() = cards;
        }

        fn show_mood(&self, mood: MoodCardModel) {
            self.bump();
            *self.mood.borrow_mut() = Some(mood);
        }

        fn reveal_refresh(&self) {
            self.bump();
            self.refresh_visible.set(true);
        }
    }

    #[derive(Default)]
    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<PlaylistResponse, PlaylistError>>>,
        requests: RefCell<Vec<PlaylistRequest>>,
    }

    impl ScriptedTransport {
        fn with_replies(replies: Vec<Result<PlaylistResponse, PlaylistError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                requests: RefCell::default(),
            }
        }

        fn bodies(&self) -> Vec<String> {
            self.requests
                .borrow()
                .iter()
                .map(|request| serde_json::to_string(request).unwrap())
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl PlaylistTransport for ScriptedTransport {
        async fn generate_playlist(
            &self,
            request: &PlaylistRequest,
        ) -> Result<PlaylistResponse, PlaylistError> {
            self.requests.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected playlist request")
        }
    }

    /// Holds each request open until the test releases it, keyed by entry text.
    #[derive(Default)]
    struct GatedTransport {
        gates: RefCell<HashMap<String, oneshot::Receiver<Result<PlaylistResponse, PlaylistError>>>>,
        started: Cell<usize>,
    }

    impl GatedTransport {
        fn gate(&self, text: &str) -> oneshot::Sender<Result<PlaylistResponse, PlaylistError>> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(text.to_string(), rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl PlaylistTransport for GatedTransport {
        async fn generate_playlist(
            &self,
            request: &PlaylistRequest,
        ) -> Result<PlaylistResponse, PlaylistError> {
            let gate = self
                .gates
                .borrow_mut()
                .remove(&request.text)
                .expect("no gate for request");
            self.started.set(self.started.get() + 1);
            gate.await.expect("gate dropped")
        }
    }

    fn song(name: &str) -> Track {
        Track {
            name: name.to_string(),
            artists: vec!["Artist X".to_string()],
            ..Track::default()
        }
    }

    fn response(label: &str, names: &[&str]) -> PlaylistResponse {
        PlaylistResponse {
            tracks: names.iter().map(|name| song(name)).collect(),
            mood: MoodAnalysis {
                label: label.to_string(),
                polarity: 0.8,
                subjectivity: 0.6,
            },
            warning: None,
            timestamp: None,
        }
    }

    fn controller(
        replies: Vec<Result<PlaylistResponse, PlaylistError>>,
    ) -> PlaylistRequestController<ScriptedTransport, RecordingView> {
        PlaylistRequestController::new(
            ScriptedTransport::with_replies(replies),
            RecordingView::default(),
            None,
        )
    }

    #[tokio::test]
    async fn blank_entries_never_reach_the_network() {
        let controller = controller(vec![]);

        for text in ["", "   ", "\n\t  "] {
            let outcome = controller.submit(text).await;
            assert_eq!(outcome, SubmitOutcome::Rejected(PlaylistError::Validation));
        }

        assert!(controller.transport().requests.borrow().is_empty());
        assert_eq!(controller.view().hint(), VALIDATION_HINT);
        assert!(controller.view().controls.get().is_none());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn successful_submission_renders_cards_and_mood() {
        let reply: PlaylistResponse = serde_json::from_str(
            r#"{"tracks":[{"name":"Song A","artists":["Artist X"]}],
                "mood":{"label":"happy","polarity":0.8,"subjectivity":0.6}}"#,
        )
        .unwrap();
        let controller = controller(vec![Ok(reply)]);

        let outcome = controller.submit("I feel great today").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rendered {
                request_id: 1,
                track_count: 1
            }
        );
        assert_eq!(
            controller.transport().bodies(),
            vec![r#"{"text":"I feel great today"}"#.to_string()]
        );

        let view = controller.view();
        let cards = view.cards.borrow();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Song A");
        assert_eq!(cards[0].artists, "Artist X");
        assert_eq!(cards[0].album, "Unknown album");
        assert_eq!(cards[0].preview, PreviewSlot::Unavailable);
        assert!(cards[0].link.is_none());

        let mood = view.mood.borrow().clone().unwrap();
        assert_eq!(
            (mood.label.as_str(), mood.polarity.as_str(), mood.subjectivity.as_str()),
            ("happy", "0.8", "0.6")
        );
        assert_eq!(view.hint(), SUCCESS_HINT);
        assert!(view.refresh_visible.get());
        assert_eq!(view.controls.get(), Some(ControlState::for_loading(false)));
        assert_eq!(controller.state().last_submitted_text, "I feel great today");
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn entry_is_trimmed_before_sending() {
        let controller = controller(vec![Ok(response("chill", &["A"]))]);
        controller.submit("  rainy sunday  ").await;

        assert_eq!(
            controller.transport().bodies(),
            vec![r#"{"text":"rainy sunday"}"#.to_string()]
        );
        assert_eq!(controller.state().last_submitted_text, "rainy sunday");
    }

    #[tokio::test]
    async fn configured_limit_is_forwarded() {
        let controller = PlaylistRequestController::new(
            ScriptedTransport::with_replies(vec![Ok(response("chill", &["A"]))]),
            RecordingView::default(),
            Some(5),
        );
        controller.submit("mellow").await;

        assert_eq!(
            controller.transport().bodies(),
            vec![r#"{"text":"mellow","limit":5}"#.to_string()]
        );
    }

    #[tokio::test]
    async fn warning_replaces_default_success_hint() {
        let mut reply = response("happy", &["A"]);
        reply.warning = Some("Unable to reach Spotify. Showing sample playlist instead.".into());
        let controller = controller(vec![Ok(reply)]);

        controller.submit("ok").await;

        assert_eq!(
            controller.view().hint(),
            "Unable to reach Spotify. Showing sample playlist instead."
        );
    }

    #[tokio::test]
    async fn new_results_replace_previous_cards_in_full() {
        let controller = controller(vec![
            Ok(response("happy", &["One", "Two", "Three"])),
            Ok(response("sad", &["Four", "Five"])),
        ]);

        controller.submit("first").await;
        assert_eq!(controller.view().titles(), vec!["One", "Two", "Three"]);

        controller.submit("second").await;
        assert_eq!(controller.view().titles(), vec!["Four", "Five"]);
        assert_eq!(controller.view().replace_calls.get(), 2);
    }

    #[tokio::test]
    async fn failure_shows_message_and_keeps_previous_render() {
        let controller = controller(vec![
            Ok(response("happy", &["Keep Me"])),
            Err(PlaylistError::from_failure_body(
                400,
                r#"{"error":"Please share how you're feeling to build a playlist."}"#,
            )),
            Err(PlaylistError::Network("connection refused".into())),
        ]);

        controller.submit("sunny").await;
        let outcome = controller.submit("cloudy").await;

        assert!(matches!(outcome, SubmitOutcome::Failed { request_id: 2, .. }));
        let view = controller.view();
        assert_eq!(
            view.hint(),
            "Please share how you're feeling to build a playlist."
        );
        assert_eq!(view.titles(), vec!["Keep Me"]);
        assert_eq!(view.mood.borrow().as_ref().unwrap().label, "happy");
        assert_eq!(view.controls.get(), Some(ControlState::for_loading(false)));
        assert_eq!(controller.state().last_submitted_text, "sunny");

        controller.submit("stormy").await;
        assert_eq!(view.hint(), DEFAULT_FAILURE_HINT);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn failed_first_submission_leaves_refresh_unarmed() {
        let controller = controller(vec![Err(PlaylistError::Network("offline".into()))]);

        controller.submit("anything").await;

        assert!(!controller.view().refresh_visible.get());
        assert!(controller.view().mood.borrow().is_none());
        assert_eq!(controller.refresh().await, SubmitOutcome::Skipped);
        assert_eq!(controller.transport().requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn refresh_before_any_success_is_a_no_op() {
        let controller = controller(vec![]);

        assert_eq!(controller.refresh().await, SubmitOutcome::Skipped);
        assert!(controller.transport().requests.borrow().is_empty());
        assert_eq!(controller.view().calls.get(), 0);
    }

    #[tokio::test]
    async fn refresh_replays_last_accepted_entry() {
        let controller = controller(vec![
            Ok(response("happy", &["A"])),
            Ok(response("happy", &["B"])),
        ]);

        controller.submit("T").await;
        let outcome = controller.refresh().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rendered {
                request_id: 2,
                track_count: 1
            }
        );
        let bodies = controller.transport().bodies();
        assert_eq!(bodies, vec![r#"{"text":"T"}"#, r#"{"text":"T"}"#]);
        assert_eq!(controller.view().titles(), vec!["B"]);
    }

    #[tokio::test]
    async fn late_response_from_superseded_request_is_discarded() {
        let transport = GatedTransport::default();
        let release_first = transport.gate("first");
        let release_second = transport.gate("second");
        let controller =
            PlaylistRequestController::new(transport, RecordingView::default(), None);

        let first = controller.submit("first");
        let second = async {
            while controller.transport().started.get() < 1 {
                tokio::task::yield_now().await;
            }
            controller.submit("second").await
        };
        let driver = async {
            while controller.transport().started.get() < 2 {
                tokio::task::yield_now().await;
            }
            release_second
                .send(Ok(response("sad", &["Second Song"])))
                .unwrap();
            while controller.is_loading() {
                tokio::task::yield_now().await;
            }
            release_first
                .send(Ok(response("happy", &["First Song"])))
                .unwrap();
        };

        let (first, second, ()) = tokio::join!(first, second, driver);

        assert_eq!(first, SubmitOutcome::Superseded { request_id: 1 });
        assert_eq!(
            second,
            SubmitOutcome::Rendered {
                request_id: 2,
                track_count: 1
            }
        );
        let view = controller.view();
        assert_eq!(view.titles(), vec!["Second Song"]);
        assert_eq!(view.mood.borrow().as_ref().unwrap().label, "sad");
        assert_eq!(view.replace_calls.get(), 1);
        assert_eq!(controller.state().last_submitted_text, "second");
    }

    #[tokio::test]
    async fn superseded_completion_does_not_clear_loading() {
        let transport = GatedTransport::default();
        let release_first = transport.gate("first");
        let release_second = transport.gate("second");
        let controller =
            PlaylistRequestController::new(transport, RecordingView::default(), None);

        let first = controller.submit("first");
        let second = async {
            while controller.transport().started.get() < 1 {
                tokio::task::yield_now().await;
            }
            controller.submit("second").await
        };
        let driver = async {
            while controller.transport().started.get() < 2 {
                tokio::task::yield_now().await;
            }
            release_first
                .send(Err(PlaylistError::Network("reset".into())))
                .unwrap();
            for _ in 0..8 {
                tokio::task::yield_now().await;
            }
            assert!(controller.is_loading());
            assert_eq!(
                controller.view().controls.get(),
                Some(ControlState::for_loading(true))
            );
            release_second
                .send(Ok(response("chill", &["Only"])))
                .unwrap();
        };

        let (first, second, ()) = tokio::join!(first, second, driver);

        assert_eq!(first, SubmitOutcome::Superseded { request_id: 1 });
        assert!(matches!(second, SubmitOutcome::Rendered { .. }));
        assert_eq!(controller.view().hint(), SUCCESS_HINT);
        assert!(!controller.is_loading());
    }
}
