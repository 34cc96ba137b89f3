use super::view_models::{PreviewSlot, TrackCardModel, PREVIEW_UNAVAILABLE};
use dioxus::prelude::*;

#[component]
pub fn TrackCard(card: TrackCardModel) -> Element {
    rsx! {
        article { class: "track-card",
            img {
                class: "track-card__art",
                src: "{card.image_src}",
                alt: "{card.image_alt}",
                loading: "lazy",
            }
            div { class: "track-card__body",
                h3 { class: "track-card__title", "{card.title}" }
                p { class: "track-card__artists", "{card.artists}" }
                p { class: "track-card__album", "{card.album}" }
                div { class: "track-card__actions",
                    {match &card.preview {
                        PreviewSlot::Audio { src } => rsx! {
                            audio { class: "track-card__preview", controls: true, preload: "none", src: "{src}" }
                        },
                        PreviewSlot::Unavailable => rsx! {
                            span { class: "track-card__placeholder", "{PREVIEW_UNAVAILABLE}" }
                        },
                    }}
                    if let Some(link) = card.link.as_ref() {
                        a {
                            class: "track-card__link",
                            href: "{link.href}",
                            target: link.target,
                            rel: link.rel,
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
