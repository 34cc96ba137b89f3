use super::view_models::{ControlState, MoodCardModel, TrackCardModel};
use crate::controller::PlaylistView;
use dioxus::prelude::*;

/// Page state the controller writes into; every field is a signal the
/// components read.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalView {
    pub hint: Signal<String>,
    pub controls: Signal<ControlState>,
    pub tracks: Signal<Vec<TrackCardModel>>,
    /// `None` keeps the mood card hidden.
    pub mood: Signal<Option<MoodCardModel>>,
    pub refresh_visible: Signal<bool>,
}

pub fn use_signal_view() -> SignalView {
    SignalView {
        hint: use_signal(String::new),
        controls: use_signal(ControlState::default),
        tracks: use_signal(Vec::new),
        mood: use_signal(|| None),
        refresh_visible: use_signal(|| false),
    }
}

impl PlaylistView for SignalView {
    fn set_hint(&self, hint: &str) {
        let mut signal = self.hint;
        signal.set(hint.to_string());
    }

    fn set_controls(&self, controls: ControlState) {
        let mut signal = self.controls;
        signal.set(controls);
    }

    fn replace_tracks(&self, cards: Vec<TrackCardModel>) {
        let mut signal = self.tracks;
        signal.set(cards);
    }

    fn show_mood(&self, mood: MoodCardModel) {
        let mut signal = self.mood;
        signal.set(Some(mood));
    }

    fn reveal_refresh(&self) {
        let mut signal = self.refresh_visible;
        signal.set(true);
    }
}
