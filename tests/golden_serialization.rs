use chrono::{TimeZone, Utc};
use cram_core::types::{
    Chapter, ChapterId, CondensedNotes, Importance, MaterialVersion, PlanSummary, StudyPlan,
    Topic, TopicId, TopicStatus,
};

#[test]
fn golden_sentinel_notes_serialization() {
    let notes = CondensedNotes::no_material(
        ChapterId::new(0),
        MaterialVersion::from_content(""),
    );

    let json_str = serde_json::to_string_pretty(&notes).unwrap();

    // Key order follows the struct declaration.
    let chapter_pos = json_str.find("\"chapter\":").unwrap();
    let version_pos = json_str.find("\"source_version\":").unwrap();
    let sections_pos = json_str.find("\"sections\":").unwrap();
    let note_pos = json_str.find("\"note\":").unwrap();

    assert!(chapter_pos < version_pos);
    assert!(version_pos < sections_pos);
    assert!(sections_pos < note_pos);

    const EXPECTED_JSON: &str = r#"{
      "chapter": 0,
      "source_version": "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
      "sections": [],
      "quick_revision": [],
      "total_sentences": 0,
      "kept_sentences": 0,
      "reduction_percent": 0,
      "note": "No material provided."
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    let roundtrip: CondensedNotes = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, notes);
}

#[test]
fn golden_plan_serialization() {
    let topic = Topic {
        id: TopicId::new(ChapterId::new(0), 0),
        name: "Wave Interference".to_string(),
        chapter: "Waves".to_string(),
        chapter_id: ChapterId::new(0),
        importance: Importance::High,
        priority: 30.0,
        estimated_minutes: 25,
        allocated_minutes: 25,
        status: TopicStatus::Study,
    };

    let plan = StudyPlan {
        topics: vec![topic],
        available_minutes: 51,
        built_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
        summary: PlanSummary {
            study_count: 1,
            skip_count: 0,
        },
    };

    let json_str = serde_json::to_string_pretty(&plan).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "topics": [
        {
          "id": "0-0",
          "name": "Wave Interference",
          "chapter": "Waves",
          "chapter_id": 0,
          "importance": "high",
          "priority": 30.0,
          "estimated_minutes": 25,
          "allocated_minutes": 25,
          "status": "study"
        }
      ],
      "available_minutes": 51,
      "built_at": "2026-03-14T09:00:00Z",
      "summary": {
        "study_count": 1,
        "skip_count": 0
      }
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    let roundtrip: StudyPlan = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, plan);
}

#[test]
fn chapter_importance_defaults_to_medium() {
    let chapter: Chapter =
        serde_json::from_str(r#"{"name":"Optics","topics":"","material":""}"#).unwrap();

    assert_eq!(chapter.importance, Importance::Medium);
    assert_eq!(chapter.importance.weight(), 2);
}

#[test]
fn unrecognized_importance_degrades_to_medium() {
    let chapter: Chapter = serde_json::from_str(
        r#"{"name":"Optics","importance":"urgent","topics":"","material":""}"#,
    )
    .expect("unrecognized importance must not fail deserialization");

    assert_eq!(chapter.importance, Importance::Medium);
    assert_eq!(chapter.importance.weight(), 2);

    assert_eq!(
        serde_json::from_str::<Importance>("\"HIGH\"").unwrap(),
        Importance::Medium,
        "matching is exact, not case-folded"
    );
}

#[test]
fn importance_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Importance::High).unwrap(), "\"high\"");
    assert_eq!(serde_json::to_string(&Importance::Low).unwrap(), "\"low\"");
    assert_eq!(
        serde_json::from_str::<Importance>("\"medium\"").unwrap(),
        Importance::Medium
    );
}
