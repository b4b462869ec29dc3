use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Header, PosterCard, VersusImage};
use crate::model::{Candidate, RequestSequence, VoteClient, VoteTally};

#[server]
pub async fn get_votes() -> Result<VoteTally, ServerFnError> {
    use crate::model::{functions, AppState};
    let app_state = expect_context::<AppState>();
    match functions::get_tally(&app_state.db.pool).await {
        Ok(tally) => Ok(tally),
        Err(e) => Err(ServerFnError::Request(e.to_string())),
    }
}

#[server]
pub async fn cast_vote(candidate: Candidate) -> Result<VoteTally, ServerFnError> {
    use crate::model::{functions, AppState};
    let app_state = expect_context::<AppState>();
    match functions::add_vote(candidate, &app_state.db.pool).await {
        Ok(tally) => Ok(tally),
        Err(e) => Err(ServerFnError::Request(e.to_string())),
    }
}

/// The production [`VoteClient`]: forwards straight to the server functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerVoteClient;

impl VoteClient for ServerVoteClient {
    fn fetch_totals(
        &self,
    ) -> impl std::future::Future<Output = Result<VoteTally, ServerFnError>> + 'static {
        get_votes()
    }

    fn cast_vote(
        &self,
        candidate: Candidate,
    ) -> impl std::future::Future<Output = Result<VoteTally, ServerFnError>> + 'static {
        cast_vote(candidate)
    }
}

#[component]
pub fn VotePage() -> impl IntoView {
    view! { <VotingPage client=ServerVoteClient /> }
}

/// Owns the tally and wires the poster cards to the backend.
///
/// Every outgoing call takes a ticket from the [`RequestSequence`] before it
/// departs; a resolution replaces the tally only if its ticket is still the
/// newest, so overlapping calls settle on the latest request instead of
/// whichever response happens to land last. A failed call leaves the tally
/// as it was.
#[component]
pub fn VotingPage<C: VoteClient>(client: C) -> impl IntoView {
    let (tally, set_tally) = signal(VoteTally::default());
    let requests = StoredValue::new(RequestSequence::new());

    let apply = move |ticket: u64, result: Result<VoteTally, ServerFnError>| match result {
        Ok(fresh) => {
            if requests
                .try_update_value(|r| r.admit(ticket))
                .unwrap_or(false)
            {
                // try_set so a resolution against a torn-down page is a no-op
                set_tally.try_set(fresh);
            }
        }
        Err(e) => warn!("vote backend call failed: {}", e),
    };

    {
        let client = client.clone();
        Effect::new(move |_| {
            let client = client.clone();
            let ticket = requests.try_update_value(|r| r.begin()).unwrap_or_default();
            spawn_local(async move {
                apply(ticket, client.fetch_totals().await);
            });
        });
    }

    let cast = move |candidate: Candidate| {
        let client = client.clone();
        let ticket = requests.try_update_value(|r| r.begin()).unwrap_or_default();
        spawn_local(async move {
            apply(ticket, client.cast_vote(candidate).await);
        });
    };

    let total_votes = Signal::derive(move || tally.get().total());
    let barbie_percentage = Signal::derive(move || tally.get().percentage(Candidate::Barbie));
    let oppenheimer_percentage =
        Signal::derive(move || tally.get().percentage(Candidate::Oppenheimer));

    let on_barbie = Callback::new({
        let cast = cast.clone();
        move |_: ()| cast(Candidate::Barbie)
    });
    let on_oppenheimer = Callback::new(move |_: ()| cast(Candidate::Oppenheimer));

    view! {
        <div id="vote-page">
            <Header total_votes />
            <div class="showdown">
                <PosterCard
                    image="/images/barbie.svg"
                    width=550
                    height=800
                    alt="Barbie Poster"
                    percentage=barbie_percentage
                    on_activate=on_barbie
                />
                <VersusImage />
                <PosterCard
                    image="/images/oppenheimer.svg"
                    width=194
                    height=300
                    alt="Oppenheimer Poster"
                    percentage=oppenheimer_percentage
                    on_activate=on_oppenheimer
                />
            </div>
        </div>
    }
}
