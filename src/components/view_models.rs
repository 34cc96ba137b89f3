// Pure descriptions of what the page shows, built from service values.

use crate::api::{MoodAnalysis, Track};
use chrono::DateTime;

pub const PLACEHOLDER_ART_URL: &str = "https://placehold.co/200x200/111428/ffffff?text=Mood";
pub const UNKNOWN_ALBUM: &str = "Unknown album";
pub const PREVIEW_UNAVAILABLE: &str = "Preview not available";
pub const EXTERNAL_LINK_LABEL: &str = "Open in Spotify";
pub const SUBMIT_LABEL: &str = "Generate playlist";
pub const SUBMIT_BUSY_LABEL: &str = "Generating...";
pub const ANALYZING_HINT: &str = "Analyzing your mood and crafting a playlist...";
pub const SUCCESS_HINT: &str = "Enjoy your personalized Spotify mix.";

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewSlot {
    Audio { src: String },
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLink {
    pub href: String,
    pub label: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackCardModel {
    pub key: String,
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub artists: String,
    pub album: String,
    pub preview: PreviewSlot,
    pub link: Option<ExternalLink>,
}

impl TrackCardModel {
    pub fn from_track(position: usize, track: &Track) -> Self {
        let key = present(&track.id)
            .map(|id| format!("{position}-{id}"))
            .unwrap_or_else(|| position.to_string());
        let preview = match present(&track.preview_url) {
            Some(src) => PreviewSlot::Audio {
                src: src.to_string(),
            },
            None => PreviewSlot::Unavailable,
        };
        let link = present(&track.external_url).map(|href| ExternalLink {
            href: href.to_string(),
            label: EXTERNAL_LINK_LABEL,
            target: "_blank",
            rel: "noreferrer noopener",
        });

        Self {
            key,
            image_src: present(&track.image_url)
                .unwrap_or(PLACEHOLDER_ART_URL)
                .to_string(),
            image_alt: format!("{} album art", track.name),
            title: track.name.clone(),
            artists: track.artists.join(", "),
            album: present(&track.album).unwrap_or(UNKNOWN_ALBUM).to_string(),
            preview,
            link,
        }
    }
}

pub fn track_cards(tracks: &[Track]) -> Vec<TrackCardModel> {
    tracks
        .iter()
        .enumerate()
        .map(|(position, track)| TrackCardModel::from_track(position, track))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodCardModel {
    pub label: String,
    pub polarity: String,
    pub subjectivity: String,
    pub generated_at: Option<String>,
}

impl MoodCardModel {
    pub fn new(mood: &MoodAnalysis, timestamp: Option<i64>) -> Self {
        Self {
            label: mood.label.clone(),
            polarity: format_score(mood.polarity),
            subjectivity: format_score(mood.subjectivity),
            generated_at: timestamp.and_then(format_generated_at),
        }
    }
}

/// Formats a score the way the service's JSON number reads: `0.8`, `1`, `-0.25`.
pub fn format_score(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn format_generated_at(timestamp: i64) -> Option<String> {
    let generated = DateTime::from_timestamp(timestamp, 0)?;
    Some(format!("Generated at {} UTC", generated.format("%H:%M")))
}

/// Submit/refresh affordances for a given loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub submit_disabled: bool,
    pub submit_label: &'static str,
    pub refresh_disabled: bool,
}

impl ControlState {
    pub fn for_loading(is_loading: bool) -> Self {
        Self {
            submit_disabled: is_loading,
            submit_label: if is_loading {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_LABEL
            },
            refresh_disabled: is_loading,
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::for_loading(false)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
