use leptos::prelude::*;

/// Decorative divider between the two poster cards.
#[component]
pub fn VersusImage() -> impl IntoView {
    view! {
        <div class="versus">
            <img src="/images/vs.svg" alt="Versus" draggable="false" />
        </div>
    }
}
