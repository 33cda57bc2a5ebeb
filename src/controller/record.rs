use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;

use crate::controller::catalog;
use crate::controller::leaderboard::{self, RankedRecord};
use crate::network::{ApiError, Backend, LapRecord};

/// Shared component that allows to look up the fetched lap records.
#[async_trait]
pub trait LiveRecords: Send + Sync {
    /// While holding this guard, the state is read-only, and can be referenced.
    async fn lock(&self) -> RwLockReadGuard<'_, RecordsState>;

    /// The size of the record collection.
    async fn nb_records(&self) -> usize {
        self.lock().await.records().len()
    }

    /// The distinct map names in the collection whose name contains
    /// the search text, in first-seen order.
    async fn map_catalog(&self, search: &str) -> Vec<String> {
        self.lock()
            .await
            .map_catalog(search)
            .into_iter()
            .map(String::from)
            .collect()
    }
}

/// The full, unpartitioned set of lap records, as last fetched.
pub struct RecordsState {
    /// All records, in the order the backend returned them.
    records: Vec<LapRecord>,

    /// `True` if the most recent fetch failed, in which case `records`
    /// still holds the previous, stale collection.
    fetch_failed: bool,

    /// The generation handed to the most recently issued fetch.
    issued_generation: u64,

    /// The generation of the most recently settled fetch. Responses
    /// of older fetches that arrive after a newer one has settled
    /// are discarded.
    settled_generation: u64,
}

impl RecordsState {
    fn init() -> Self {
        RecordsState {
            records: vec![],
            fetch_failed: false,
            issued_generation: 0,
            settled_generation: 0,
        }
    }

    /// The record collection; empty until the first successful fetch.
    pub fn records(&self) -> &[LapRecord] {
        &self.records
    }

    /// `True` if the collection is stale because the most recent
    /// fetch failed.
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    /// The distinct map names in the collection whose name contains
    /// the search text, in first-seen order.
    pub fn map_catalog(&self, search: &str) -> Vec<&str> {
        catalog::map_catalog(&self.records, search)
    }

    /// The ranked leaderboard of the given map.
    pub fn leaderboard(&self, map_name: &str) -> Vec<RankedRecord<'_>> {
        leaderboard::map_leaderboard(&self.records, map_name)
    }

    /// Tag a new fetch; its response must settle with this generation.
    fn issue_fetch(&mut self) -> u64 {
        self.issued_generation += 1;
        self.issued_generation
    }

    /// Apply the response of the fetch tagged with `generation`.
    ///
    /// On success, the collection is replaced wholesale, and the size of
    /// the new collection is returned. On failure, the stale collection
    /// is retained. Either way, a response that was outpaced by a
    /// later-issued one is discarded.
    fn settle_fetch(
        &mut self,
        generation: u64,
        response: Result<Vec<LapRecord>, ApiError>,
    ) -> Option<usize> {
        if generation <= self.settled_generation {
            log::debug!("discard out-of-order fetch response #{}", generation);
            return None;
        }
        self.settled_generation = generation;

        match response {
            Ok(records) => {
                let nb_records = records.len();
                self.records = records;
                self.fetch_failed = false;
                Some(nb_records)
            }
            Err(_) => {
                self.fetch_failed = true;
                None
            }
        }
    }
}

#[derive(Clone)]
pub struct RecordController {
    api: Arc<dyn Backend>,
    state: Arc<RwLock<RecordsState>>,
}

impl RecordController {
    pub fn init(api: &Arc<dyn Backend>) -> Self {
        RecordController {
            api: api.clone(),
            state: Arc::new(RwLock::new(RecordsState::init())),
        }
    }

    /// Fetch all records, and replace the held collection.
    ///
    /// Returns the size of the new collection, or `None` if nothing was
    /// replaced: either the fetch failed (logged, stale collection kept),
    /// or a fetch issued later has already settled. Failures never
    /// propagate to the caller; the client stays interactive with
    /// whatever collection it has.
    pub async fn refresh(&self) -> Option<usize> {
        let generation = self.state.write().await.issue_fetch();

        let response = self.api.laptimes().await;
        if let Err(err) = &response {
            log::error!("failed to fetch lap records: {}", err);
        }

        self.state.write().await.settle_fetch(generation, response)
    }
}

#[async_trait]
impl LiveRecords for RecordController {
    async fn lock(&self) -> RwLockReadGuard<'_, RecordsState> {
        self.state.read().await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::network::mock::{record, MockBackend};

    fn controller_with(api: Arc<MockBackend>) -> RecordController {
        let api = api as Arc<dyn Backend>;
        RecordController::init(&api)
    }

    #[tokio::test]
    async fn test_refresh_replaces_collection() {
        let api = Arc::new(MockBackend::new());
        api.push_laptimes(Ok(vec![record("alice", "MapA", "01:23.456")]));
        api.push_laptimes(Ok(vec![
            record("alice", "MapA", "01:23.456"),
            record("bob", "MapA", "00:59.999"),
        ]));
        let records = controller_with(api.clone());

        assert_eq!(Some(1), records.refresh().await);
        assert_eq!(Some(2), records.refresh().await);
        assert_eq!(2, records.nb_records().await);
        assert_eq!(2, api.nb_fetches());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_collection() {
        let api = Arc::new(MockBackend::new());
        api.push_laptimes(Ok(vec![record("alice", "MapA", "01:23.456")]));
        api.push_laptimes(Err(ApiError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )));
        let records = controller_with(api);

        assert_eq!(Some(1), records.refresh().await);
        assert_eq!(None, records.refresh().await);

        let state = records.lock().await;
        assert_eq!(1, state.records().len());
        assert!(state.fetch_failed());
    }

    #[tokio::test]
    async fn test_next_success_clears_failure_flag() {
        let api = Arc::new(MockBackend::new());
        api.push_laptimes(Err(ApiError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )));
        api.push_laptimes(Ok(vec![record("alice", "MapA", "01:23.456")]));
        let records = controller_with(api);

        assert_eq!(None, records.refresh().await);
        assert!(records.lock().await.fetch_failed());

        assert_eq!(Some(1), records.refresh().await);
        assert!(!records.lock().await.fetch_failed());
    }

    #[test]
    fn test_out_of_order_settlement_is_discarded() {
        let mut state = RecordsState::init();
        let first = state.issue_fetch();
        let second = state.issue_fetch();

        assert_eq!(
            Some(1),
            state.settle_fetch(second, Ok(vec![record("bob", "MapA", "00:59.999")]))
        );

        // The older response arrives last; the newer collection wins.
        assert_eq!(
            None,
            state.settle_fetch(first, Ok(vec![record("alice", "MapA", "01:23.456")]))
        );
        assert_eq!("bob", state.records()[0].username);
    }

    #[test]
    fn test_late_failure_does_not_mark_newer_collection_stale() {
        let mut state = RecordsState::init();
        let first = state.issue_fetch();
        let second = state.issue_fetch();

        state.settle_fetch(second, Ok(vec![record("bob", "MapA", "00:59.999")]));
        state.settle_fetch(
            first,
            Err(ApiError::Rejected {
                reason: "timeout".to_string(),
            }),
        );
        assert!(!state.fetch_failed());
    }
}
