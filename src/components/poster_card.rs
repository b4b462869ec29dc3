use leptos::prelude::*;

use crate::components::ProgressBar;

/// One candidate's poster with its share of the vote underneath.
///
/// Every click runs `on_activate` once; the card never disables itself, so
/// repeated activations each trigger the callback again. The width and
/// height are intrinsic-dimension hints for the image, layout is left to the
/// stylesheet.
#[component]
pub fn PosterCard(
    #[prop(into)] image: String,
    width: u32,
    height: u32,
    #[prop(into)] alt: String,
    #[prop(into)] percentage: Signal<f64>,
    on_activate: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="poster-card" on:click=move |_| on_activate.run(())>
            <img
                src=image
                width=width.to_string()
                height=height.to_string()
                alt=alt
                draggable="false"
            />
            <ProgressBar percentage />
        </div>
    }
}
