use items::Item;

use crate::geo::{geo_proximity, haversine_km};
use crate::similarity::{
    category_similarity, date_proximity, day_difference, description_similarity,
    location_similarity, name_similarity,
};
use crate::types::{Confidence, MatchConfig, MatchError, MatchResult, ScoreBreakdown, SignalScores};

/// Scores at most this far below the threshold still count as meeting it.
const THRESHOLD_EPSILON: f64 = 1e-9;

const REASON_SAME_CATEGORY: &str = "Same category";
const REASON_SIMILAR_LOCATION: &str = "Similar location";
const REASON_SIMILAR_PERIOD: &str = "Similar time period";
const REASON_SIMILAR_DESCRIPTION: &str = "Similar description";
const REASON_FALLBACK: &str = "Potential match";

fn non_blank(value: &str) -> Option<&str> {
    Some(value).filter(|s| !s.trim().is_empty())
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_blank)
}

/// Pure pairwise scorer for item snapshots.
///
/// Holds no state beyond its immutable [`MatchConfig`].
#[derive(Debug, Clone)]
pub struct MatchScorer {
    config: MatchConfig,
}

impl MatchScorer {
    /// Build a scorer after validating `config`.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Raw similarity of each signal. A field missing on either side yields 0.
    pub fn signals(&self, a: &Item, b: &Item) -> SignalScores {
        let category = match (&a.category, &b.category) {
            (Some(x), Some(y)) => category_similarity(x, y, &self.config.related_category_keywords),
            _ => 0.0,
        };
        let name = match (non_blank(&a.name), non_blank(&b.name)) {
            (Some(x), Some(y)) => name_similarity(x, y),
            _ => 0.0,
        };
        let location = match (text(&a.location), text(&b.location)) {
            (Some(x), Some(y)) => location_similarity(x, y),
            _ => 0.0,
        };
        let date = match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => date_proximity(day_difference(x, y)),
            _ => 0.0,
        };
        let description = match (text(&a.description), text(&b.description)) {
            (Some(x), Some(y)) => description_similarity(x, y),
            _ => 0.0,
        };

        SignalScores {
            category,
            name,
            location,
            date,
            description,
        }
    }

    fn combine(&self, signals: &SignalScores) -> (f64, f64, f64) {
        let w = &self.config.weights;
        let weighted_sum = w.category * signals.category
            + w.name * signals.name
            + w.location * signals.location
            + w.date * signals.date
            + w.description * signals.description;
        let total = w.total();
        let score = if total > 0.0 {
            (weighted_sum / total).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (weighted_sum, total, score)
    }

    /// Combined similarity of `a` and `b` in [0.0, 1.0].
    pub fn score(&self, a: &Item, b: &Item) -> f64 {
        self.combine(&self.signals(a, b)).2
    }

    /// Whether `score` meets the configured threshold (inclusive).
    pub fn accepts(&self, score: f64) -> bool {
        score + THRESHOLD_EPSILON >= self.config.match_threshold
    }

    /// Human-readable summary of the signals that stood out for a pair.
    ///
    /// Re-evaluates simplified checks independently of the weighted score.
    pub fn match_reason(&self, lost: &Item, found: &Item) -> String {
        let mut reasons = Vec::new();

        if matches!((&lost.category, &found.category), (Some(x), Some(y)) if x == y) {
            reasons.push(REASON_SAME_CATEGORY);
        }
        if let (Some(x), Some(y)) = (text(&lost.location), text(&found.location)) {
            if location_similarity(x, y) > 0.7 {
                reasons.push(REASON_SIMILAR_LOCATION);
            }
        }
        if let (Some(x), Some(y)) = (lost.created_at, found.created_at) {
            if day_difference(x, y) <= 7 {
                reasons.push(REASON_SIMILAR_PERIOD);
            }
        }
        if let (Some(x), Some(y)) = (text(&lost.description), text(&found.description)) {
            if description_similarity(x, y) > 0.3 {
                reasons.push(REASON_SIMILAR_DESCRIPTION);
            }
        }

        if reasons.is_empty() {
            REASON_FALLBACK.to_string()
        } else {
            reasons.join(", ")
        }
    }

    /// Score a pair and explain every component, including the unweighted
    /// geographic proximity.
    pub fn breakdown(&self, a: &Item, b: &Item) -> ScoreBreakdown {
        let signals = self.signals(a, b);
        let (weighted_sum, total_weight, score) = self.combine(&signals);
        let distance_km = a
            .coordinates()
            .zip(b.coordinates())
            .map(|(x, y)| haversine_km(x, y));

        ScoreBreakdown {
            signals,
            weighted_sum,
            total_weight,
            score,
            confidence: Confidence::from_score(score),
            reason: self.match_reason(a, b),
            distance_km,
            geo_proximity: distance_km.map(geo_proximity),
        }
    }

    /// Assemble a match record for an already-scored pair.
    pub fn build_result(&self, lost: &Item, found: &Item, score: f64) -> MatchResult {
        MatchResult {
            lost_item_id: lost.id,
            found_item_id: found.id,
            lost_item: lost.clone(),
            found_item: found.clone(),
            match_score: score,
            match_reason: self.match_reason(lost, found),
            confidence: Confidence::from_score(score),
        }
    }

    /// Sort by score, best first, and keep at most `limit` results.
    ///
    /// The sort is stable, so equal scores keep their enumeration order.
    pub fn rank(&self, mut results: Vec<MatchResult>, limit: usize) -> Vec<MatchResult> {
        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(limit);
        results
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }
}
