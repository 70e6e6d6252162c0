//! Card components.
//!
//! A container family in the usual header/title/description/content split.

use leptos::prelude::*;

/// Card container.
#[component]
pub fn Card(
    /// Extra classes appended to the card container.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=format!("shimatabi-card {class}")>{children()}</div> }
}

/// Card header area.
#[component]
pub fn CardHeader(
    /// Extra classes appended to the header.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=format!("shimatabi-card-header {class}")>{children()}</div> }
}

/// Card title.
#[component]
pub fn CardTitle(
    /// Extra classes appended to the title.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <h3 class=format!("shimatabi-card-title {class}")>{children()}</h3> }
}

/// Muted description line under the title.
#[component]
pub fn CardDescription(
    /// Extra classes appended to the description.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <p class=format!("shimatabi-card-description {class}")>{children()}</p> }
}

/// Card body.
#[component]
pub fn CardContent(
    /// Extra classes appended to the body.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=format!("shimatabi-card-content {class}")>{children()}</div> }
}
