//! End-to-end scenarios for the resume aggregate through the public API.

use chrono::NaiveDate;

use resume_manager::domain::foundation::{
    DomainError, ErrorCode, Notification, UserId, ValidationSink, YearMonth,
};
use resume_manager::domain::resume::{
    Career, CompanyName, FullName, Link, NewResume, Period, Project, ProjectFields, Resume,
    ResumeName, ResumeSnapshot, END_BEFORE_START_MESSAGE, INVALID_URL_MESSAGE,
};

// =============================================================================
// Helpers
// =============================================================================

fn ym(year: i32, month: u32) -> Option<YearMonth> {
    YearMonth::new(year, month).ok()
}

fn base_resume() -> Resume {
    let mut sink = Notification::new();
    let name = ResumeName::create(&mut sink, "職務経歴書");
    let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
    Resume::create(&mut sink, NewResume::new(UserId::new("user-1").unwrap(), name, date)).unwrap()
}

fn project_fields(company: &str) -> ProjectFields {
    ProjectFields {
        company_name: company.to_string(),
        start_date: ym(2021, 1),
        end_date: ym(2021, 12),
        is_active: false,
        name: "販売管理".to_string(),
        overview: "販売管理システムの保守".to_string(),
        team_comp: "4名".to_string(),
        role: "開発".to_string(),
        achievement: "障害件数を半減".to_string(),
        ..ProjectFields::default()
    }
}

fn expect_validation(err: &DomainError) {
    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(!err.violations.is_empty());
}

// =============================================================================
// Value objects
// =============================================================================

#[test]
fn company_name_of_51_characters_records_one_error() {
    let mut sink = Notification::new();
    CompanyName::create(&mut sink, &"a".repeat(51));
    assert_eq!(sink.error_count(), 1);
    assert_eq!(sink.messages_for("companyName").len(), 1);
}

#[test]
fn resume_name_violations_are_reported_independently() {
    let mut sink = Notification::new();
    ResumeName::create(&mut sink, ".invalid/");
    assert_eq!(sink.messages_for("resumeName").len(), 2);
}

#[test]
fn period_end_before_start_is_attributed_to_end_date() {
    let mut sink = Notification::new();
    Period::create(&mut sink, ym(2024, 1), ym(2023, 1), false);
    assert_eq!(sink.messages_for("endDate"), [END_BEFORE_START_MESSAGE]);
}

#[test]
fn http_link_is_rejected() {
    let mut sink = Notification::new();
    Link::create(&mut sink, "http://example.com");
    assert_eq!(sink.messages_for("link"), [INVALID_URL_MESSAGE]);
}

#[test]
fn full_name_parts_fail_independently() {
    let mut sink = Notification::new();
    FullName::create(&mut sink, "", "名前が長すぎる名前が長すぎる");
    assert_eq!(sink.messages_for("lastName").len(), 1);
    assert_eq!(sink.messages_for("firstName").len(), 1);
}

// =============================================================================
// Aggregate scenarios
// =============================================================================

#[test]
fn career_then_project_then_overlapping_career() {
    let mut sink = Notification::new();
    let abc = Career::create(&mut sink, "ABC", ym(2020, 1), ym(2023, 12), false);
    let resume = base_resume().add_career(&mut sink, abc).unwrap();

    let project = Project::create(&mut sink, project_fields("ABC"));
    let resume = resume.add_project(&mut sink, project).unwrap();
    assert_eq!(resume.projects().len(), 1);

    let def = Career::create(&mut sink, "DEF", ym(2023, 10), ym(2024, 11), false);
    let err = resume.add_career(&mut sink, def).unwrap_err();

    expect_validation(&err);
    assert!(err.message.contains("DEF"));
    assert!(err.message.contains("ABC"));
    assert_eq!(resume.careers().len(), 1);
}

#[test]
fn project_for_unknown_company_is_rejected() {
    let mut sink = Notification::new();
    let abc = Career::create(&mut sink, "ABC", ym(2020, 1), ym(2023, 12), false);
    let resume = base_resume().add_career(&mut sink, abc).unwrap();

    let project = Project::create(&mut sink, project_fields("GHI"));
    let err = resume.add_project(&mut sink, project).unwrap_err();

    assert_eq!(
        err.messages_for("companyName"),
        vec!["GHIは職歴に存在しません。職歴に存在する会社名を選択してください。"]
    );
}

#[test]
fn preexisting_errors_fail_an_otherwise_valid_addition() {
    let mut sink = Notification::new();
    sink.add_error("resumeName", "既存のエラー");
    let career = Career::create(&mut sink, "ABC", ym(2020, 1), None, true);

    let err = base_resume().add_career(&mut sink, career).unwrap_err();

    assert_eq!(err.messages_for("resumeName"), vec!["既存のエラー"]);
}

#[test]
fn snapshot_survives_json_round_trip() {
    let mut sink = Notification::new();
    let abc = Career::create(&mut sink, "ABC", ym(2020, 1), None, true);
    let resume = base_resume().add_career(&mut sink, abc).unwrap();

    let json = serde_json::to_string(&resume.to_snapshot()).unwrap();
    assert!(json.contains("\"2020-01\""));

    let snapshot: ResumeSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(Resume::reconstruct(snapshot), resume);
}

#[test]
fn mutations_leave_the_original_untouched() {
    let mut sink = Notification::new();
    let original = base_resume();
    let abc = Career::create(&mut sink, "ABC", ym(2020, 1), None, true);

    let changed = original.add_career(&mut sink, abc).unwrap();

    assert!(original.careers().is_empty());
    assert_eq!(changed.careers().len(), 1);
    assert_eq!(changed.id(), original.id());
}
