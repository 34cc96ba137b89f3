use crate::api::{HttpPlaylistService, ServiceHealth};
use crate::components::{use_signal_view, MoodCard, ServiceStatusBadge, TrackCard};
use crate::config::AppConfig;
use crate::controller::PlaylistRequestController;
use dioxus::prelude::*;
use std::rc::Rc;

type PageController = PlaylistRequestController<HttpPlaylistService, super::SignalView>;

#[component]
pub fn MoodPlaylistApp() -> Element {
    let config = use_context::<AppConfig>();
    let view = use_signal_view();
    let mut entry = use_signal(String::new);
    let mut health = use_signal(|| None::<ServiceHealth>);

    let controller: Rc<PageController> = use_hook(|| {
        Rc::new(PlaylistRequestController::new(
            HttpPlaylistService::new(config.clone()),
            view,
            config.playlist_limit,
        ))
    });

    // Probe the service once on mount; submission never waits on it
    let health_controller = controller.clone();
    use_future(move || {
        let controller = health_controller.clone();
        async move {
            health.set(Some(controller.transport().check_health().await));
        }
    });

    let on_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            let text = entry();
            spawn(async move {
                controller.submit(&text).await;
            });
        }
    };

    let on_refresh = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn(async move {
                controller.refresh().await;
            });
        }
    };

    let controls = (view.controls)();
    let hint = (view.hint)();
    let refresh_hidden = !(view.refresh_visible)();
    let mood = (view.mood)();
    let tracks = (view.tracks)();

    rsx! {
        main { class: "moodbeats",
            header { class: "hero",
                div { class: "hero__title-row",
                    h1 { class: "hero__title", "MoodBeats" }
                    ServiceStatusBadge { health: health() }
                }
                p { class: "hero__tagline",
                    "Tell us how you feel and we'll curate a Spotify playlist to match."
                }
            }

            form { id: "mood-form", class: "mood-form", onsubmit: on_submit,
                textarea {
                    id: "mood-text",
                    class: "mood-form__input",
                    rows: "4",
                    placeholder: "I'm feeling...",
                    value: "{entry}",
                    oninput: move |evt| entry.set(evt.value()),
                }
                div { class: "mood-form__actions",
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: controls.submit_disabled,
                        "{controls.submit_label}"
                    }
                    button {
                        id: "refresh-btn",
                        r#type: "button",
                        class: "button button--ghost",
                        hidden: refresh_hidden,
                        disabled: controls.refresh_disabled,
                        onclick: on_refresh,
                        "Refresh playlist"
                    }
                }
            }

            p { id: "playlist-hint", class: "playlist-hint", "{hint}" }

            if let Some(mood) = mood {
                MoodCard { mood }
            }

            section { id: "playlist", class: "playlist",
                for card in tracks {
                    TrackCard { key: "{card.key}", card: card.clone() }
                }
            }
        }
    }
}
