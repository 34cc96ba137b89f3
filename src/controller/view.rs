use crate::components::view_models::{ControlState, MoodCardModel, TrackCardModel};

/// Render target for the controller. The page implements it with signals; tests
/// record the calls.
pub trait PlaylistView {
    fn set_hint(&self, hint: &str);
    fn set_controls(&self, controls: ControlState);
    /// Replaces every rendered card with `cards`, in order.
    fn replace_tracks(&self, cards: Vec<TrackCardModel>);
    fn show_mood(&self, mood: MoodCardModel);
    fn reveal_refresh(&self);
}
