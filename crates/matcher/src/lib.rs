//! # Recovr Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` pairs LOST items with FOUND items held in an
//! [`ItemStore`](items::ItemStore). Every candidate pair is scored on five
//! signals, filtered by a minimum score, ranked and truncated.
//!
//! ## Scoring
//!
//! Each signal yields a similarity in [0.0, 1.0]; a field missing on either
//! side contributes 0.
//!
//! - category: 1.0 when equal, a small bonus for related labels (`HANDBAG` vs `BAGS`).
//! - name: best of word overlap and edit similarity.
//! - location: exact, containment, then shared words.
//! - date: tiered by whole days between the two reports.
//! - description: best of Jaccard and edit similarity.
//!
//! The combined score is the weighted sum divided by the total weight, so two
//! identical items score exactly 1.0. Geographic distance is computed for
//! [`ScoreBreakdown`] only and never moves the score.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: threshold, result caps, [`SignalWeights`] and the
//!   related-category keywords.
//! - [`MatchScorer`]: pure pairwise scorer.
//! - [`Matcher`]: store-backed queries (`find_potential_matches`,
//!   `find_matches_for_item`, `compare`).
//! - [`MatchResult`]: lost/found ids and snapshots, score, reason, [`Confidence`].
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use items::{InMemoryItemStore, Item, ItemCategory, ItemStatus, UserId};
//! use matcher::{MatchConfig, Matcher};
//!
//! let store = InMemoryItemStore::with_items(vec![
//!     Item::new(1, "Black wallet", ItemStatus::Lost)
//!         .with_category(ItemCategory::Accessories)
//!         .with_location("Central station")
//!         .reported_by(7),
//!     Item::new(2, "black wallet", ItemStatus::Found)
//!         .with_category(ItemCategory::Accessories)
//!         .with_location("Central station")
//!         .reported_by(8),
//! ])
//! .expect("seed store");
//!
//! let matcher = Matcher::new(Arc::new(store), MatchConfig::default()).expect("valid config");
//! let suggestions = matcher.find_potential_matches(UserId(7)).expect("query");
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(suggestions[0].found_item.name, "black wallet");
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to record
//! per-query latency, pairs scored and hit counts. This is typically done once
//! during service startup so all calls through [`Matcher`] share the same
//! metrics backend.

pub mod engine;
pub mod geo;
pub mod metrics;
pub mod scorer;
pub mod similarity;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, MatchMetrics, MatchOperation};
pub use crate::scorer::MatchScorer;
pub use crate::types::{
    Confidence, MatchConfig, MatchError, MatchResult, ScoreBreakdown, SignalScores, SignalWeights,
};
