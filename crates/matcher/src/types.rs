use items::{Item, ItemId, StoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relative weight of each similarity signal in the combined score.
///
/// Weights are normalized by their total at scoring time, so they only need to
/// be non-negative with a positive sum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SignalWeights {
    #[serde(default = "SignalWeights::default_category")]
    pub category: f64,
    #[serde(default = "SignalWeights::default_name")]
    pub name: f64,
    #[serde(default = "SignalWeights::default_location")]
    pub location: f64,
    #[serde(default = "SignalWeights::default_date")]
    pub date: f64,
    #[serde(default = "SignalWeights::default_description")]
    pub description: f64,
}

impl SignalWeights {
    pub(crate) fn default_category() -> f64 {
        0.25
    }

    pub(crate) fn default_name() -> f64 {
        0.10
    }

    pub(crate) fn default_location() -> f64 {
        0.25
    }

    pub(crate) fn default_date() -> f64 {
        0.15
    }

    pub(crate) fn default_description() -> f64 {
        0.20
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.category + self.name + self.location + self.date + self.description
    }

    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("category", self.category),
            ("name", self.name),
            ("location", self.location),
            ("date", self.date),
            ("description", self.description),
        ]
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            category: Self::default_category(),
            name: Self::default_name(),
            location: Self::default_location(),
            date: Self::default_date(),
            description: Self::default_description(),
        }
    }
}

/// Matching policy shared by every query served by a [`Matcher`](crate::Matcher).
///
/// The config is fixed when the matcher is built; changing the threshold means
/// building a new matcher rather than mutating a shared one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Minimum combined score (inclusive) for a pair to be reported.
    #[serde(default = "MatchConfig::default_match_threshold")]
    pub match_threshold: f64,
    /// Result cap for a user's suggestions.
    #[serde(default = "MatchConfig::default_max_suggestions")]
    pub max_suggestions: usize,
    /// Result cap for matches of a single item.
    #[serde(default = "MatchConfig::default_max_item_matches")]
    pub max_item_matches: usize,
    #[serde(default)]
    pub weights: SignalWeights,
    /// Category labels containing the same keyword count as related.
    #[serde(default = "MatchConfig::default_related_category_keywords")]
    pub related_category_keywords: Vec<String>,
}

impl MatchConfig {
    pub(crate) fn default_match_threshold() -> f64 {
        0.4
    }

    pub(crate) fn default_max_suggestions() -> usize {
        10
    }

    pub(crate) fn default_max_item_matches() -> usize {
        5
    }

    pub(crate) fn default_related_category_keywords() -> Vec<String> {
        vec!["BAG".to_string(), "BOOK".to_string()]
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(MatchError::InvalidConfig(
                "match_threshold must be between 0.0 and 1.0".into(),
            ));
        }
        if self.max_suggestions == 0 {
            return Err(MatchError::InvalidConfig(
                "max_suggestions must be greater than zero".into(),
            ));
        }
        if self.max_item_matches == 0 {
            return Err(MatchError::InvalidConfig(
                "max_item_matches must be greater than zero".into(),
            ));
        }
        for (signal, weight) in self.weights.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "weights.{signal} must be a finite value >= 0.0"
                )));
            }
        }
        if self.weights.total() <= 0.0 {
            return Err(MatchError::InvalidConfig(
                "weights must not all be zero".into(),
            ));
        }
        if self
            .related_category_keywords
            .iter()
            .any(|k| k.trim().is_empty())
        {
            return Err(MatchError::InvalidConfig(
                "related_category_keywords must not contain blank entries".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_threshold: Self::default_match_threshold(),
            max_suggestions: Self::default_max_suggestions(),
            max_item_matches: Self::default_max_item_matches(),
            weights: SignalWeights::default(),
            related_category_keywords: Self::default_related_category_keywords(),
        }
    }
}

/// Coarse confidence tier derived from a match score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Confidence::High
        } else if score >= 0.6 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// A ranked pairing of a lost item with a found item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub lost_item_id: ItemId,
    pub found_item_id: ItemId,
    pub lost_item: Item,
    pub found_item: Item,
    /// Normalized weighted similarity in [0.0, 1.0].
    pub match_score: f64,
    /// Comma-separated list of the signals that stood out.
    pub match_reason: String,
    pub confidence: Confidence,
}

/// Raw per-signal similarities, each in [0.0, 1.0] before weighting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SignalScores {
    pub category: f64,
    pub name: f64,
    pub location: f64,
    pub date: f64,
    pub description: f64,
}

/// Full explanation of how a pair's score was assembled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub signals: SignalScores,
    /// Sum of `weight * signal` over all signals.
    pub weighted_sum: f64,
    pub total_weight: f64,
    /// `weighted_sum / total_weight`, clamped to [0.0, 1.0].
    pub score: f64,
    pub confidence: Confidence,
    pub reason: String,
    /// Great-circle distance when both items carry coordinates.
    pub distance_km: Option<f64>,
    /// Tiered proximity for `distance_km`. Informational only; it carries no
    /// weight in `score`.
    pub geo_proximity: Option<f64>,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Reading item snapshots from the store failed.
    #[error("item store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.match_threshold, 0.4);
        assert_eq!(cfg.max_suggestions, 10);
        assert_eq!(cfg.max_item_matches, 5);
        assert!((cfg.weights.total() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn threshold_outside_unit_range_rejected() {
        let cfg = MatchConfig::default().with_threshold(1.5);
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("match_threshold")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_limits_rejected() {
        let cfg = MatchConfig {
            max_item_matches: 0,
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("max_item_matches")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_or_empty_weights_rejected() {
        let cfg = MatchConfig {
            weights: SignalWeights {
                date: -0.1,
                ..SignalWeights::default()
            },
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("weights.date")),
            other => panic!("unexpected error: {other}"),
        }

        let cfg = MatchConfig {
            weights: SignalWeights {
                category: 0.0,
                name: 0.0,
                location: 0.0,
                date: 0.0,
                description: 0.0,
            },
            ..MatchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: MatchConfig =
            serde_json::from_str(r#"{"match_threshold": 0.55, "weights": {"name": 0.3}}"#)
                .unwrap();
        assert_eq!(cfg.match_threshold, 0.55);
        assert_eq!(cfg.max_suggestions, 10);
        assert_eq!(cfg.weights.name, 0.3);
        assert_eq!(cfg.weights.category, 0.25);
        assert_eq!(cfg.related_category_keywords, vec!["BAG", "BOOK"]);
    }

    #[test]
    fn confidence_tiers() {
        assert_eq!(Confidence::from_score(0.8), Confidence::High);
        assert_eq!(Confidence::from_score(0.79), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.6), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.59), Confidence::Low);
        assert_eq!(
            serde_json::to_value(Confidence::Medium).unwrap(),
            serde_json::json!("MEDIUM")
        );
    }
}
