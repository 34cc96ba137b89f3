use super::view_models::MoodCardModel;
use dioxus::prelude::*;

#[component]
pub fn MoodCard(mood: MoodCardModel) -> Element {
    rsx! {
        section { id: "mood-card", class: "mood-card",
            h2 { class: "mood-card__heading", "Your mood" }
            dl { class: "mood-card__stats",
                div { class: "mood-card__stat",
                    dt { "Mood" }
                    dd { class: "mood-card__label", "{mood.label}" }
                }
                div { class: "mood-card__stat",
                    dt { "Polarity" }
                    dd { class: "mood-card__polarity", "{mood.polarity}" }
                }
                div { class: "mood-card__stat",
                    dt { "Subjectivity" }
                    dd { class: "mood-card__subjectivity", "{mood.subjectivity}" }
                }
            }
            if let Some(generated_at) = mood.generated_at.as_ref() {
                p { class: "mood-card__timestamp", "{generated_at}" }
            }
        }
    }
}
