//! Page components and the signal-backed render target they read from.

mod app;
mod mood_card;
mod signal_view;
mod status_badge;
mod track_card;
pub mod view_models;

pub use app::*;
pub use mood_card::*;
pub use signal_view::*;
pub use status_badge::*;
pub use track_card::*;
