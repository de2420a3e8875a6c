//! End-to-end checks of the dashboard's observable behavior through the
//! public API.

use syllabus_sync::logger::LectureLogForm;
use syllabus_sync::session::{
    FileStore, MemoryStore, Role, Route, SessionGate, SessionRecord, SessionState, SessionStore,
};
use syllabus_sync::syllabus::*;
use tempfile::tempdir;

const DEPT: &str = "Computer Science";

fn expected_alert(syllabus: &Syllabus, subtopic: &Subtopic) -> bool {
    let Some(prerequisite) = subtopic.prerequisite else {
        return false;
    };
    match syllabus.subtopics().find(|s| s.id == prerequisite) {
        Some(p) => p.status != TopicStatus::Completed && subtopic.status != TopicStatus::Blocked,
        None => false,
    }
}

#[test]
fn alert_fires_iff_prerequisite_exists_incomplete_and_not_blocked() {
    let mut syllabus = data_structures_syllabus();
    // A dangling reference must not raise an alert
    syllabus.units[0].subtopics.push(Subtopic::new(99, "Dangling", TopicStatus::Pending).requires(500));

    let index = syllabus.index();
    for subtopic in syllabus.subtopics() {
        assert_eq!(
            prerequisite_alert(subtopic, &index).is_some(),
            expected_alert(&syllabus, subtopic),
            "subtopic {}",
            subtopic.id
        );
    }
}

#[test]
fn alerts_hold_for_every_status_combination() {
    for &own in TopicStatus::all() {
        for &prerequisite in TopicStatus::all() {
            let syllabus = Syllabus {
                subject: "S".to_string(),
                code: "S1".to_string(),
                total_units: 1,
                units: vec![Unit::new(1, "U")
                    .subtopic(Subtopic::new(1, "P", prerequisite))
                    .subtopic(Subtopic::new(2, "S", own).requires(1))],
            };

            let fired = syllabus.prerequisite_alerts().iter().any(|a| a.subtopic == SubtopicId(2));
            let expected = prerequisite != TopicStatus::Completed && own != TopicStatus::Blocked;
            assert_eq!(fired, expected, "own={:?} prerequisite={:?}", own, prerequisite);
        }
    }
}

#[test]
fn rollups_match_reference_values() {
    let units: Vec<Unit> = [(100, 14), (85, 16), (45, 8), (0, 0)]
        .iter()
        .enumerate()
        .map(|(i, (progress, hours))| {
            Unit::new(i as u32 + 1, "u")
                .progress(*progress, UnitStatus::InProgress)
                .hours(0, *hours)
        })
        .collect();

    assert_eq!(overall_progress(&units), 58);
    assert_eq!(hours_logged(&units), 38);
}

#[test]
fn login_derives_role_from_email() {
    let mut gate = SessionGate::load(MemoryStore::new(), DEPT);
    let faculty = gate.login("x@x.com", "y").unwrap();
    assert_eq!(faculty.role, Role::Faculty);
    assert!(gate.is_authenticated());

    let hod = gate.login("hod@x.com", "y").unwrap();
    assert_eq!(hod.role, Role::Hod);
    assert_eq!(hod.name, "Dr. Admin Kumar");
}

#[test]
fn logout_then_reload_redirects_to_login() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let mut gate = SessionGate::load(FileStore::new(&path), DEPT);
        gate.login("faculty@demo.com", "secret").unwrap();
    }

    // Session survives a restart
    let mut gate = SessionGate::load(FileStore::new(&path), DEPT);
    assert_eq!(gate.resolve(Route::Index), Route::Dashboard);

    gate.logout().unwrap();
    assert_eq!(FileStore::new(&path).load().unwrap(), None);

    let gate = SessionGate::load(FileStore::new(&path), DEPT);
    assert_eq!(gate.resolve(Route::Dashboard), Route::Login);
}

#[test]
fn malformed_session_file_starts_anonymous() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"email": 42}"#).unwrap();

    let gate = SessionGate::load(FileStore::new(&path), DEPT);
    assert_eq!(gate.state(), &SessionState::Anonymous);
    assert!(!path.exists());
}

#[test]
fn stored_record_uses_expected_json_shape() {
    let store = MemoryStore::new();
    let mut gate = SessionGate::load(&store, DEPT);
    gate.login("hod@demo.com", "pw").unwrap();

    let raw = store.load().unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["email"], "hod@demo.com");
    assert_eq!(value["role"], "hod");
    assert_eq!(value["department"], DEPT);
    assert_eq!(SessionRecord::from_json(&raw).unwrap().name, "Dr. Admin Kumar");
}

#[test]
fn logger_submit_requires_subject_and_topic() {
    let mut form = LectureLogForm {
        subject: "CS301".to_string(),
        topic: "Tree Traversals".to_string(),
        ..Default::default()
    };
    assert!(form.can_submit(false));

    form.subject.clear();
    assert!(!form.can_submit(false));

    form.subject = "CS301".to_string();
    form.topic.clear();
    assert!(!form.can_submit(false));
}
