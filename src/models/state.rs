//! Immutable view state with a stale-response guard
//!
//! Every fetch is tagged with a sequence number when issued. Applying an
//! outcome is a pure function `(previous, outcome) -> new`; outcomes whose
//! sequence number is not the latest issued leave the state untouched, so a
//! slow response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::goldprice::GoldPrice;

/// Monotonically increasing fetch sequence numbers
#[derive(Debug, Default)]
pub struct FetchSequence(AtomicU64);

impl FetchSequence {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Payload of a successful fetch
#[derive(Debug, Clone)]
pub struct FetchData {
    pub latest: Option<GoldPrice>,
    pub history: Vec<GoldPrice>,
}

/// Result of one fetch, tagged with its issue sequence number
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub seq: u64,
    pub result: Result<FetchData, String>,
}

/// Displayed state; every update builds a new value
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub latest: Option<GoldPrice>,
    pub history: Vec<GoldPrice>,
    pub loading: bool,
    /// Sequence number of the latest issued fetch
    pub last_seq: u64,
}

impl ViewState {
    /// Record that a fetch with `seq` was issued
    pub fn begin_fetch(&self, seq: u64) -> ViewState {
        ViewState {
            latest: self.latest.clone(),
            history: self.history.clone(),
            loading: true,
            last_seq: seq,
        }
    }

    /// Apply a fetch outcome. Superseded outcomes are ignored; failures
    /// clear the loading flag and keep the displayed data.
    pub fn apply(&self, outcome: &FetchOutcome) -> ViewState {
        if outcome.seq != self.last_seq {
            return self.clone();
        }
        match &outcome.result {
            Ok(data) => ViewState {
                latest: data.latest.clone().or_else(|| self.latest.clone()),
                history: data.history.clone(),
                loading: false,
                last_seq: self.last_seq,
            },
            Err(_) => ViewState {
                loading: false,
                ..self.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: i64, price: f64) -> GoldPrice {
        GoldPrice {
            id,
            base_price: price,
            official_price: price,
            sale_price: price,
            update_time: "2024-05-01T10:00:00".to_string(),
        }
    }

    #[test]
    fn test_successful_fetch_replaces_state() {
        let seqs = FetchSequence::default();
        let seq = seqs.next();
        let state = ViewState::default().begin_fetch(seq);
        assert!(state.loading);

        let outcome = FetchOutcome {
            seq,
            result: Ok(FetchData {
                latest: Some(quote(1, 510.0)),
                history: vec![quote(1, 510.0), quote(2, 500.0)],
            }),
        };
        let state = state.apply(&outcome);

        assert!(!state.loading);
        assert_eq!(state.latest.as_ref().unwrap().base_price, 510.0);
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_failed_fetch_keeps_prior_data() {
        let state = ViewState {
            latest: Some(quote(1, 500.0)),
            history: vec![quote(1, 500.0), quote(2, 490.0)],
            loading: false,
            last_seq: 1,
        };

        let state = state.begin_fetch(2);
        let outcome = FetchOutcome {
            seq: 2,
            result: Err("Request Error: network unreachable".to_string()),
        };
        let state = state.apply(&outcome);

        assert!(!state.loading);
        assert_eq!(state.latest.as_ref().unwrap().base_price, 500.0);
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let seqs = FetchSequence::default();
        let first = seqs.next();
        let second = seqs.next();
        assert!(second > first);

        // The second fetch supersedes the first before either resolves
        let state = ViewState::default().begin_fetch(first).begin_fetch(second);

        let stale = FetchOutcome {
            seq: first,
            result: Ok(FetchData {
                latest: Some(quote(1, 480.0)),
                history: vec![quote(1, 480.0), quote(2, 470.0)],
            }),
        };
        let state = state.apply(&stale);
        assert!(state.loading);
        assert!(state.latest.is_none());
        assert!(state.history.is_empty());

        let fresh = FetchOutcome {
            seq: second,
            result: Ok(FetchData {
                latest: Some(quote(3, 520.0)),
                history: vec![quote(3, 520.0), quote(4, 510.0)],
            }),
        };
        let state = state.apply(&fresh);
        assert!(!state.loading);
        assert_eq!(state.latest.as_ref().unwrap().base_price, 520.0);
    }
}
