use leptos::prelude::*;

/// A horizontal bar filled to the given percentage.
///
/// Does no clamping of its own, the caller is responsible for keeping the
/// value inside [0, 100].
#[component]
pub fn ProgressBar(#[prop(into)] percentage: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div class="progress-fill" style:width=move || format!("{}%", percentage.get())></div>
        </div>
    }
}
