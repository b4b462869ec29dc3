use std::future::Future;

use leptos::prelude::ServerFnError;

use super::{Candidate, VoteTally};

/// Capability handle to the vote backend.
///
/// The voting page receives this as a prop instead of reaching for the
/// server functions directly, so tests can substitute a fake.
pub trait VoteClient: Clone + Send + Sync + 'static {
    /// Current totals, without casting anything.
    fn fetch_totals(&self) -> impl Future<Output = Result<VoteTally, ServerFnError>> + 'static;

    /// Casts one vote and resolves to the updated totals.
    fn cast_vote(
        &self,
        candidate: Candidate,
    ) -> impl Future<Output = Result<VoteTally, ServerFnError>> + 'static;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RequestSequence;
    use futures::executor::block_on;
    use std::sync::{Arc, Mutex};

    /// Records every cast and answers from a scripted list of tallies, one
    /// per call in order.
    #[derive(Clone, Default)]
    struct FakeVoteClient {
        calls: Arc<Mutex<Vec<Candidate>>>,
        replies: Arc<Mutex<Vec<VoteTally>>>,
    }

    impl FakeVoteClient {
        fn with_replies(replies: Vec<VoteTally>) -> Self {
            Self {
                calls: Arc::default(),
                replies: Arc::new(Mutex::new(replies)),
            }
        }

        fn calls(&self) -> Vec<Candidate> {
            self.calls.lock().unwrap().clone()
        }

        fn next_reply(&self) -> VoteTally {
            self.replies.lock().unwrap().remove(0)
        }
    }

    impl VoteClient for FakeVoteClient {
        fn fetch_totals(&self) -> impl Future<Output = Result<VoteTally, ServerFnError>> + 'static {
            let reply = self.next_reply();
            async move { Ok(reply) }
        }

        fn cast_vote(
            &self,
            candidate: Candidate,
        ) -> impl Future<Output = Result<VoteTally, ServerFnError>> + 'static {
            self.calls.lock().unwrap().push(candidate);
            let reply = self.next_reply();
            async move { Ok(reply) }
        }
    }

    #[test]
    fn activation_casts_exactly_one_vote() {
        let client = FakeVoteClient::with_replies(vec![VoteTally {
            barbie: 4,
            oppenheimer: 7,
        }]);
        let mut requests = RequestSequence::new();
        let mut slot = VoteTally::default();

        let ticket = requests.begin();
        let fresh = block_on(client.cast_vote(Candidate::Barbie)).unwrap();
        if requests.admit(ticket) {
            slot = fresh;
        }

        assert_eq!(client.calls(), vec![Candidate::Barbie]);
        assert_eq!(slot.total(), 11);
    }

    #[test]
    fn rapid_activations_issue_independent_calls_and_the_newest_request_wins() {
        let client = FakeVoteClient::with_replies(vec![
            VoteTally {
                barbie: 1,
                oppenheimer: 0,
            },
            VoteTally {
                barbie: 2,
                oppenheimer: 0,
            },
        ]);
        let mut requests = RequestSequence::new();
        let mut slot = VoteTally::default();

        let first_ticket = requests.begin();
        let first = client.cast_vote(Candidate::Barbie);
        let second_ticket = requests.begin();
        let second = client.cast_vote(Candidate::Barbie);
        assert_eq!(client.calls().len(), 2);

        // the second call resolves before the first
        let fresh = block_on(second).unwrap();
        if requests.admit(second_ticket) {
            slot = fresh;
        }
        let fresh = block_on(first).unwrap();
        if requests.admit(first_ticket) {
            slot = fresh;
        }

        assert_eq!(
            slot,
            VoteTally {
                barbie: 2,
                oppenheimer: 0,
            }
        );
    }

    #[test]
    fn slow_initial_fetch_cannot_overwrite_a_newer_vote() {
        let client = FakeVoteClient::with_replies(vec![
            VoteTally {
                barbie: 3,
                oppenheimer: 7,
            },
            VoteTally {
                barbie: 4,
                oppenheimer: 7,
            },
        ]);
        let mut requests = RequestSequence::new();
        let mut slot = VoteTally::default();

        let fetch_ticket = requests.begin();
        let fetch = client.fetch_totals();
        let vote_ticket = requests.begin();
        let vote = client.cast_vote(Candidate::Barbie);

        let fresh = block_on(vote).unwrap();
        if requests.admit(vote_ticket) {
            slot = fresh;
        }
        let fresh = block_on(fetch).unwrap();
        if requests.admit(fetch_ticket) {
            slot = fresh;
        }

        assert_eq!(
            slot,
            VoteTally {
                barbie: 4,
                oppenheimer: 7,
            }
        );
    }
}
