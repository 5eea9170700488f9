//! Read-side views: skills, enriched roster, stats, desk snapshot.

use workload_core::{
    engine::AssignmentEngine,
    skill::Skill,
    stats::WorkloadStats,
    status::WorkloadStatus,
};

fn build() -> AssignmentEngine {
    AssignmentEngine::build_test().expect("build test engine")
}

#[test]
fn skills_are_ordered_by_name() {
    let engine = build();
    let names: Vec<Skill> = engine.list_skills().unwrap().into_iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            Skill::DataAnalytics,
            Skill::HardwareEngineering,
            Skill::ProjectManagement,
            Skill::QualityAssurance,
            Skill::SoftwareDevelopment,
            Skill::UiUxDesign,
        ]
    );
}

#[test]
fn builtin_stats() {
    let engine = build();
    assert_eq!(
        engine.stats().unwrap(),
        WorkloadStats { total: 20, available: 11, busy: 6, critical: 3 }
    );
}

#[test]
fn reads_are_idempotent() {
    let engine = build();
    assert_eq!(engine.stats().unwrap(), engine.stats().unwrap());
    assert_eq!(
        engine.list_employees_enriched().unwrap(),
        engine.list_employees_enriched().unwrap()
    );
}

#[test]
fn enriched_roster_fields() {
    let engine = build();
    let roster = engine.list_employees_enriched().unwrap();
    assert_eq!(roster.len(), 20);

    let lisa = roster
        .iter()
        .find(|e| e.employee.name == "Lisa Anderson")
        .unwrap();
    assert_eq!(lisa.status, WorkloadStatus::Critical);
    assert_eq!(lisa.skill_code, "HWE");
    assert_eq!(lisa.skill_color, "#FF6B35");
    assert_eq!(lisa.initials, "LA");
    assert_eq!(lisa.load_pct, 87.5);

    let ids: Vec<i64> = roster.iter().map(|e| e.employee.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn stats_follow_assignments() {
    let mut engine = build();
    // Kevin Lee goes from 5 h to 25 h: AVAILABLE -> BUSY.
    engine.assign("Quarterly report", "Data Analytics", None, 20).unwrap();
    let stats = engine.stats().unwrap();
    assert_eq!(stats.available, 10);
    assert_eq!(stats.busy, 7);
    assert_eq!(stats.total, 20);
}

#[test]
fn snapshot_serializes_for_the_front_end() {
    let mut engine = build();
    engine.assign("Wireframes", "UI/UX Design", Some("high"), 5).unwrap();

    let state = engine.default_snapshot().unwrap();
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["stats"]["total"], 20);
    assert_eq!(json["skills"].as_array().unwrap().len(), 6);
    assert_eq!(json["skills"][0], "Data Analytics");
    assert_eq!(json["employees"][0]["name"], "Alex Rivera");
    assert_eq!(json["employees"][0]["skillCode"], "SWD");
    assert_eq!(json["log"][0]["taskName"], "Wireframes");
    assert_eq!(json["log"][0]["skillCode"], "UXD");
    assert_eq!(json["log"][0]["success"], true);
}

#[test]
fn employee_lookup_by_id() {
    let engine = build();
    let kevin = engine.employee(11).unwrap().expect("seeded employee 11");
    assert_eq!(kevin.name, "Kevin Lee");
    assert_eq!(kevin.expertise, Skill::DataAnalytics);
    assert!(engine.employee(999).unwrap().is_none());
}
