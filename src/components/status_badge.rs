use crate::api::ServiceHealth;
use dioxus::prelude::*;

#[component]
pub fn ServiceStatusBadge(health: Option<ServiceHealth>) -> Element {
    let (modifier, label, title) = match &health {
        None => ("pending", "Checking service…", String::new()),
        Some(ServiceHealth::Online) => ("online", "Service online", String::new()),
        Some(ServiceHealth::Offline(reason)) => {
            ("offline", "Service unreachable", reason.clone())
        }
    };

    rsx! {
        span { class: "status-badge status-badge--{modifier}", title: "{title}", "{label}" }
    }
}
