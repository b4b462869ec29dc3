use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] total_votes: Signal<u64>) -> impl IntoView {
    view! {
        <header id="page-header">
            <div class="title">"Barbenheimer"</div>
            <div class="vote-count">{move || total_votes.get()} " Votes"</div>
        </header>
    }
}
