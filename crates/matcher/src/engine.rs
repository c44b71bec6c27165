use std::sync::Arc;
use std::time::Instant;

use items::{Item, ItemId, ItemStatus, ItemStore, UserId};

use crate::metrics::{metrics_recorder, MatchOperation};
use crate::scorer::MatchScorer;
use crate::types::{MatchConfig, MatchError, MatchResult, ScoreBreakdown};


/// Matcher pairing lost items with found items held in an [`ItemStore`].
///
/// Each query reads fresh snapshots from the store, scores every candidate
/// pair in memory and returns the ranked, truncated list. Nothing is cached
/// between calls.
pub struct Matcher {
    store: Arc<dyn ItemStore>,
    scorer: MatchScorer,
}

impl Matcher {
    /// Construct a matcher over `store` after validating `config`.
    pub fn new(store: Arc<dyn ItemStore>, config: MatchConfig) -> Result<Self, MatchError> {
        Ok(Self::with_scorer(store, MatchScorer::new(config)?))
    }

    /// Construct a matcher from an already-built scorer.
    pub fn with_scorer(store: Arc<dyn ItemStore>, scorer: MatchScorer) -> Self {
        Self { store, scorer }
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    pub fn config(&self) -> &MatchConfig {
        self.scorer.config()
    }

    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.store
    }

    /// Best matches between `user`'s LOST items and FOUND items reported by
    /// anyone else, capped at `max_suggestions`.
    pub fn find_potential_matches(&self, user: UserId) -> Result<Vec<MatchResult>, MatchError> {
        let start = Instant::now();

        let lost_items: Vec<Item> = self
            .store
            .find_by_reporter(user)?
            .into_iter()
            .filter(|item| item.status == ItemStatus::Lost)
            .collect();
        let found_items: Vec<Item> = self
            .store
            .find_by_status(ItemStatus::Found)?
            .into_iter()
            .filter(|item| item.reported_by != Some(user))
            .collect();

        let mut matches = Vec::new();
        for lost in &lost_items {
            for found in &found_items {
                let score = self.scorer.score(lost, found);
                if self.scorer.accepts(score) {
                    matches.push(self.scorer.build_result(lost, found, score));
                }
            }
        }

        let pairs = lost_items.len() * found_items.len();
        let accepted = matches.len();
        let matches = self.scorer.rank(matches, self.config().max_suggestions);
        tracing::debug!(
            user = %user,
            lost = lost_items.len(),
            found = found_items.len(),
            accepted,
            returned = matches.len(),
            "computed match suggestions"
        );
        self.observe(MatchOperation::Suggestions, start, pairs, matches.len());
        Ok(matches)
    }

    /// Best counterparts for a single item, capped at `max_item_matches`.
    ///
    /// A LOST item is matched against FOUND items; any other status is matched
    /// against LOST items. An unknown id yields an empty list.
    pub fn find_matches_for_item(&self, item_id: ItemId) -> Result<Vec<MatchResult>, MatchError> {
        let start = Instant::now();

        let Some(item) = self.store.get(item_id)? else {
            tracing::debug!(item_id = %item_id, "item not found, no matches");
            return Ok(Vec::new());
        };

        let target = item.status.counterpart();
        let candidates: Vec<Item> = self
            .store
            .find_by_status(target)?
            .into_iter()
            .filter(|candidate| candidate.id != item.id && !item.same_reporter(candidate))
            .collect();

        let mut matches = Vec::new();
        for candidate in &candidates {
            let score = self.scorer.score(&item, candidate);
            if self.scorer.accepts(score) {
                let result = if item.status == ItemStatus::Lost {
                    self.scorer.build_result(&item, candidate, score)
                } else {
                    self.scorer.build_result(candidate, &item, score)
                };
                matches.push(result);
            }
        }

        let accepted = matches.len();
        let matches = self.scorer.rank(matches, self.config().max_item_matches);
        tracing::debug!(
            item_id = %item_id,
            status = %item.status,
            target = %target,
            candidates = candidates.len(),
            accepted,
            returned = matches.len(),
            "computed item matches"
        );
        self.observe(
            MatchOperation::ItemMatches,
            start,
            candidates.len(),
            matches.len(),
        );
        Ok(matches)
    }

    /// Explain the score of two stored items. `None` when either id is unknown.
    pub fn compare(
        &self,
        first: ItemId,
        second: ItemId,
    ) -> Result<Option<ScoreBreakdown>, MatchError> {
        let (Some(a), Some(b)) = (self.store.get(first)?, self.store.get(second)?) else {
            return Ok(None);
        };
        Ok(Some(self.scorer.breakdown(&a, &b)))
    }

    fn observe(&self, operation: MatchOperation, start: Instant, pairs: usize, hits: usize) {
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(operation, start.elapsed(), pairs, hits);
        }
    }
}
