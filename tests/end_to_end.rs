//! Config file -> seeded store -> matcher, through the umbrella crate.

use std::io::Write;

use recovr::{build_matcher, Confidence, ItemId, RecovrConfig, UserId};
use tempfile::NamedTempFile;

const SEED: &str = r#"[
  {"id": 1, "name": "iPhone 13", "status": "LOST", "category": "ELECTRONICS",
   "location": "Central Park", "description": "black iPhone with cracked screen",
   "createdAt": "2024-05-01T09:00:00Z", "reportedBy": 100},
  {"id": 2, "name": "iPhone 13 Pro", "status": "FOUND", "category": "ELECTRONICS",
   "location": "Central Park entrance", "description": "black phone, screen cracked",
   "createdAt": "2024-05-02T09:00:00Z", "reportedBy": 200},
  {"id": 3, "name": "Leather handbag", "status": "LOST", "category": "handbag",
   "location": "Museum cloakroom", "createdAt": "2024-05-03T12:00:00Z", "reportedBy": 100},
  {"id": 4, "name": "Leather bag", "status": "FOUND", "category": "BAGS",
   "location": "Museum cloakroom", "createdAt": "2024-05-03T15:00:00Z", "reportedBy": 300},
  {"id": 5, "name": "Spare keys", "status": "FOUND", "category": "KEYS",
   "location": "Harbour ferry", "reportedBy": 100}
]"#;

fn seeded_config(threshold: f64) -> (NamedTempFile, RecovrConfig) {
    let mut seed = NamedTempFile::new().unwrap();
    seed.write_all(SEED.as_bytes()).unwrap();

    let yaml = format!(
        r#"
version: "1.0"
name: "end to end"
store:
  backend: "seeded"
  seed_path: "{}"
matching:
  match_threshold: {threshold}
"#,
        seed.path().display()
    );
    let config = RecovrConfig::from_yaml(&yaml).unwrap();
    (seed, config)
}

#[test]
fn suggestions_from_seeded_config() {
    let (_seed, config) = seeded_config(0.4);
    let matcher = build_matcher(&config).unwrap();

    let suggestions = matcher.find_potential_matches(UserId(100)).unwrap();
    let pairs: Vec<(ItemId, ItemId)> = suggestions
        .iter()
        .map(|m| (m.lost_item_id, m.found_item_id))
        .collect();

    // Best first; the user's own found keys never show up.
    assert_eq!(pairs, vec![(ItemId(1), ItemId(2)), (ItemId(3), ItemId(4))]);
    assert_eq!(suggestions[0].confidence, Confidence::Medium);
    assert_eq!(suggestions[1].confidence, Confidence::Low);
    assert!(suggestions[0].match_score > suggestions[1].match_score);
}

#[test]
fn related_categories_and_threshold_from_config() {
    let (_seed, config) = seeded_config(0.8);
    let matcher = build_matcher(&config).unwrap();

    let breakdown = matcher.compare(ItemId(3), ItemId(4)).unwrap().unwrap();
    assert_eq!(breakdown.signals.category, 0.05);
    assert_eq!(breakdown.signals.name, 0.75);
    assert_eq!(breakdown.signals.location, 1.0);
    assert_eq!(breakdown.signals.date, 1.0);

    // The phone pair scores about 0.80 and falls just under this threshold.
    let matches = matcher.find_matches_for_item(ItemId(1)).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn missing_seed_file_fails_to_build() {
    let yaml = r#"
version: "1.0"
store:
  backend: "seeded"
  seed_path: "/nonexistent/items.json"
"#;
    let config = RecovrConfig::from_yaml(yaml).unwrap();
    assert!(build_matcher(&config).is_err());
}
