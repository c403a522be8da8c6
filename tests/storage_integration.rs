//! 存储层集成测试
//!
//! 在内存 SQLite 上跑完整迁移后直接驱动 SeaOrmStorage，
//! 覆盖目录号分配、选课、评分与成绩计算的行为约定。

use chrono::{NaiveTime, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ColumnTrait, Database, EntityTrait, QueryFilter, Set};

use rust_lms_next::entity;
use rust_lms_next::entity::prelude::*;
use rust_lms_next::models::assignments::requests::{AssignmentScope, CreateAssignmentParams};
use rust_lms_next::models::classes::entities::Season;
use rust_lms_next::models::classes::requests::{ClassScope, CreateClassParams};
use rust_lms_next::models::submissions::requests::{GradeSubmissionParams, SubmitTextParams};
use rust_lms_next::storage::Storage;
use rust_lms_next::storage::sea_orm_storage::SeaOrmStorage;
use rust_lms_next::utils::compute_gpa;

async fn setup() -> SeaOrmStorage {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage::from_connection(db)
}

async fn seed_department(storage: &SeaOrmStorage, subject: &str, name: &str) {
    DepartmentActiveModel {
        subject: Set(subject.to_string()),
        name: Set(name.to_string()),
    }
    .insert(storage.connection())
    .await
    .expect("seed department");
}

async fn seed_professor(storage: &SeaOrmStorage, uid: &str, works_in: &str) {
    ProfessorActiveModel {
        uid: Set(uid.to_string()),
        first_name: Set("Pat".to_string()),
        last_name: Set("Morgan".to_string()),
        works_in: Set(works_in.to_string()),
    }
    .insert(storage.connection())
    .await
    .expect("seed professor");
}

async fn seed_student(storage: &SeaOrmStorage, uid: &str, major: &str) {
    StudentActiveModel {
        uid: Set(uid.to_string()),
        first_name: Set("Sam".to_string()),
        last_name: Set("Rivera".to_string()),
        date_of_birth: Set(946_684_800), // 2000-01-01
        major: Set(major.to_string()),
    }
    .insert(storage.connection())
    .await
    .expect("seed student");
}

async fn seed_course(storage: &SeaOrmStorage, catalog_id: i64, subject: &str, number: i32) {
    CourseActiveModel {
        catalog_id: Set(catalog_id),
        department: Set(subject.to_string()),
        number: Set(number),
        name: Set(format!("{subject} {number}")),
    }
    .insert(storage.connection())
    .await
    .expect("seed course");
}

async fn seed_class(storage: &SeaOrmStorage, offering: i64, season: &str, year: i32, taught_by: &str) -> i64 {
    ClassActiveModel {
        offering: Set(offering),
        season: Set(season.to_string()),
        year: Set(year),
        start_time: Set(9 * 3600),
        end_time: Set(10 * 3600),
        location: Set("WEB 101".to_string()),
        taught_by: Set(taught_by.to_string()),
        ..Default::default()
    }
    .insert(storage.connection())
    .await
    .expect("seed class")
    .id
}

async fn seed_enrollment(storage: &SeaOrmStorage, uid: &str, class_id: i64, grade: Option<&str>) {
    EnrolledActiveModel {
        student: Set(uid.to_string()),
        class_id: Set(class_id),
        grade: Set(grade.map(str::to_string)),
        ..Default::default()
    }
    .insert(storage.connection())
    .await
    .expect("seed enrollment");
}

fn scope(subject: &str, number: i32, season: Season, year: i32) -> ClassScope {
    ClassScope {
        subject: subject.to_string(),
        number,
        season,
        year,
    }
}

#[tokio::test]
async fn courses_in_empty_department_is_empty() {
    let storage = setup().await;
    seed_department(&storage, "PHIL", "Philosophy").await;

    let rows = storage.list_courses_in_department("PHIL").await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn catalog_lists_departments_without_courses() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_department(&storage, "PHIL", "Philosophy").await;
    seed_course(&storage, 0, "CS", 3500).await;

    let catalog = storage.get_catalog().await.unwrap();
    assert_eq!(catalog.len(), 2);
    let phil = catalog.iter().find(|d| d.subject == "PHIL").unwrap();
    assert!(phil.courses.is_empty());
    let cs = catalog.iter().find(|d| d.subject == "CS").unwrap();
    assert_eq!(cs.courses.len(), 1);
    assert_eq!(cs.courses[0].number, 3500);
}

#[tokio::test]
async fn create_course_assigns_dense_catalog_ids() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;

    storage.create_course("CS", 1000, "Intro").await.unwrap();
    storage.create_course("CS", 2000, "Discrete").await.unwrap();
    storage.create_course("CS", 3000, "Algorithms").await.unwrap();

    let ids: Vec<i64> = Courses::find()
        .all(storage.connection())
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.catalog_id)
        .collect();
    assert_eq!(ids, vec![0, 1, 2]);

    storage.create_course("CS", 4000, "Systems").await.unwrap();
    let count = Courses::find()
        .filter(entity::courses::Column::CatalogId.eq(3))
        .all(storage.connection())
        .await
        .unwrap()
        .len();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn create_course_fills_catalog_id_holes() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_course(&storage, 0, "CS", 1000).await;
    seed_course(&storage, 2, "CS", 3000).await;

    storage.create_course("CS", 2000, "Discrete").await.unwrap();

    let filled = Courses::find()
        .filter(entity::courses::Column::CatalogId.eq(1))
        .one(storage.connection())
        .await
        .unwrap()
        .expect("hole filled");
    assert_eq!(filled.number, 2000);
}

#[tokio::test]
async fn duplicate_course_is_rejected() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;

    storage.create_course("CS", 3500, "Software I").await.unwrap();
    let err = storage
        .create_course("CS", 3500, "Software I again")
        .await
        .unwrap_err();
    assert!(err.is_rejection());

    let count = Courses::find().all(storage.connection()).await.unwrap().len();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn double_enroll_is_rejected_and_leaves_one_row() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_professor(&storage, "u0000001", "CS").await;
    seed_student(&storage, "u1000001", "CS").await;
    seed_course(&storage, 0, "CS", 3500).await;
    seed_class(&storage, 0, "Fall", 2024, "u0000001").await;

    let scope = scope("CS", 3500, Season::Fall, 2024);
    storage.enroll(&scope, "u1000001").await.unwrap();

    let err = storage.enroll(&scope, "u1000001").await.unwrap_err();
    assert!(err.is_rejection());

    let rows = Enrolled::find().all(storage.connection()).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn enroll_fails_when_scope_matches_two_classes() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_professor(&storage, "u0000001", "CS").await;
    seed_student(&storage, "u1000001", "CS").await;
    seed_course(&storage, 0, "CS", 3500).await;
    seed_class(&storage, 0, "Fall", 2024, "u0000001").await;
    seed_class(&storage, 0, "Fall", 2024, "u0000001").await;

    let err = storage
        .enroll(&scope("CS", 3500, Season::Fall, 2024), "u1000001")
        .await
        .unwrap_err();
    assert!(err.is_rejection());
    assert!(Enrolled::find().all(storage.connection()).await.unwrap().is_empty());
}

#[tokio::test]
async fn gpa_counts_only_assigned_grades() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_professor(&storage, "u0000001", "CS").await;
    seed_student(&storage, "u1000001", "CS").await;
    seed_course(&storage, 0, "CS", 1000).await;
    seed_course(&storage, 1, "CS", 2000).await;
    seed_course(&storage, 2, "CS", 3000).await;
    let a = seed_class(&storage, 0, "Fall", 2024, "u0000001").await;
    let b = seed_class(&storage, 1, "Spring", 2024, "u0000001").await;
    let c = seed_class(&storage, 2, "Summer", 2024, "u0000001").await;
    seed_enrollment(&storage, "u1000001", a, Some("A")).await;
    seed_enrollment(&storage, "u1000001", b, Some("B")).await;
    seed_enrollment(&storage, "u1000001", c, None).await;

    let grades = storage.get_letter_grades("u1000001").await.unwrap();
    assert_eq!(grades.len(), 3);
    assert!(grades.contains(&"--".to_string()));
    assert_eq!(compute_gpa(&grades), 3.5);

    let none = storage.get_letter_grades("u1999999").await.unwrap();
    assert_eq!(compute_gpa(&none), 0.0);
}

#[tokio::test]
async fn get_user_prefers_students_and_misses_unknown_uid() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_department(&storage, "MATH", "Mathematics").await;
    // 同一 uid 同时出现在学生表和教授表
    seed_student(&storage, "u1000001", "MATH").await;
    seed_professor(&storage, "u1000001", "CS").await;

    let profile = storage.get_user_profile("u1000001").await.unwrap().unwrap();
    assert_eq!(profile.department.as_deref(), Some("MATH"));

    assert!(storage.get_user_profile("u1999999").await.unwrap().is_none());
}

#[tokio::test]
async fn create_class_rejects_overlapping_slot_in_same_location() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_professor(&storage, "u0000001", "CS").await;
    seed_course(&storage, 0, "CS", 3500).await;
    seed_course(&storage, 1, "CS", 4400).await;

    let base = CreateClassParams {
        subject: "CS".to_string(),
        number: 3500,
        season: Season::Fall,
        year: 2024,
        start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        location: "WEB 101".to_string(),
        instructor: "u0000001".to_string(),
    };
    storage.create_class(&base).await.unwrap();

    // 同地点同学期，时间段重叠
    let overlapping = CreateClassParams {
        number: 4400,
        start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        ..base.clone()
    };
    let err = storage.create_class(&overlapping).await.unwrap_err();
    assert!(err.is_rejection());

    // 首尾相接不算冲突
    let adjacent = CreateClassParams {
        number: 4400,
        start: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        ..base
    };
    storage.create_class(&adjacent).await.unwrap();
}

async fn seed_assignment_fixture(storage: &SeaOrmStorage) -> (ClassScope, AssignmentScope) {
    seed_department(storage, "CS", "Computer Science").await;
    seed_professor(storage, "u0000001", "CS").await;
    seed_student(storage, "u1000001", "CS").await;
    seed_student(storage, "u1000002", "CS").await;
    seed_course(storage, 0, "CS", 3500).await;
    seed_class(storage, 0, "Fall", 2024, "u0000001").await;

    let class_scope = scope("CS", 3500, Season::Fall, 2024);
    storage
        .create_assignment_category(&class_scope, "Homework", 50)
        .await
        .unwrap();
    storage
        .create_assignment(&CreateAssignmentParams {
            subject: "CS".to_string(),
            number: 3500,
            season: Season::Fall,
            year: 2024,
            category: "Homework".to_string(),
            asgname: "HW1".to_string(),
            asgpoints: 100,
            asgdue: Utc.with_ymd_and_hms(2024, 12, 1, 23, 59, 0).unwrap(),
            asgcontents: "Write a parser.".to_string(),
        })
        .await
        .unwrap();

    let assignment_scope = AssignmentScope {
        subject: "CS".to_string(),
        number: 3500,
        season: Season::Fall,
        year: 2024,
        category: "Homework".to_string(),
        asgname: "HW1".to_string(),
    };
    (class_scope, assignment_scope)
}

fn submit_params(assignment: &AssignmentScope, uid: &str, contents: &str) -> SubmitTextParams {
    SubmitTextParams {
        subject: assignment.subject.clone(),
        number: assignment.number,
        season: assignment.season,
        year: assignment.year,
        category: assignment.category.clone(),
        asgname: assignment.asgname.clone(),
        uid: uid.to_string(),
        contents: contents.to_string(),
    }
}

#[tokio::test]
async fn duplicate_category_and_assignment_names_are_rejected() {
    let storage = setup().await;
    let (class_scope, _) = seed_assignment_fixture(&storage).await;

    let err = storage
        .create_assignment_category(&class_scope, "Homework", 60)
        .await
        .unwrap_err();
    assert!(err.is_rejection());

    let err = storage
        .create_assignment(&CreateAssignmentParams {
            subject: "CS".to_string(),
            number: 3500,
            season: Season::Fall,
            year: 2024,
            category: "Homework".to_string(),
            asgname: "HW1".to_string(),
            asgpoints: 50,
            asgdue: Utc.with_ymd_and_hms(2024, 12, 8, 23, 59, 0).unwrap(),
            asgcontents: "Duplicate.".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_rejection());
}

#[tokio::test]
async fn assignments_in_class_use_outer_join_semantics() {
    let storage = setup().await;
    let (class_scope, assignment_scope) = seed_assignment_fixture(&storage).await;
    storage.enroll(&class_scope, "u1000001").await.unwrap();

    // 未提交：score 为 null
    let rows = storage
        .get_assignments_in_class(&class_scope, "u1000001")
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].aname, "HW1");
    assert_eq!(rows[0].cname, "Homework");
    assert!(rows[0].score.is_none());

    storage
        .submit_assignment_text(&submit_params(&assignment_scope, "u1000001", "my answer"))
        .await
        .unwrap();
    storage
        .grade_submission(&GradeSubmissionParams {
            subject: "CS".to_string(),
            number: 3500,
            season: Season::Fall,
            year: 2024,
            category: "Homework".to_string(),
            asgname: "HW1".to_string(),
            uid: "u1000001".to_string(),
            score: 87,
        })
        .await
        .unwrap();

    let rows = storage
        .get_assignments_in_class(&class_scope, "u1000001")
        .await
        .unwrap();
    assert_eq!(rows[0].score, Some(87));

    // 未选课的学生看不到任何作业
    let rows = storage
        .get_assignments_in_class(&class_scope, "u1000002")
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn grading_touches_only_the_matching_pair() {
    let storage = setup().await;
    let (class_scope, assignment_scope) = seed_assignment_fixture(&storage).await;
    storage.enroll(&class_scope, "u1000001").await.unwrap();
    storage.enroll(&class_scope, "u1000002").await.unwrap();
    storage
        .submit_assignment_text(&submit_params(&assignment_scope, "u1000001", "first"))
        .await
        .unwrap();
    storage
        .submit_assignment_text(&submit_params(&assignment_scope, "u1000002", "second"))
        .await
        .unwrap();

    storage
        .grade_submission(&GradeSubmissionParams {
            subject: "CS".to_string(),
            number: 3500,
            season: Season::Fall,
            year: 2024,
            category: "Homework".to_string(),
            asgname: "HW1".to_string(),
            uid: "u1000001".to_string(),
            score: 95,
        })
        .await
        .unwrap();

    let rows = storage
        .get_submissions_to_assignment(&assignment_scope)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    let first = rows.iter().find(|r| r.uid == "u1000001").unwrap();
    let second = rows.iter().find(|r| r.uid == "u1000002").unwrap();
    assert_eq!(first.score, 95);
    assert_eq!(second.score, 0);
}

#[tokio::test]
async fn grading_a_missing_submission_is_rejected() {
    let storage = setup().await;
    let (_, _) = seed_assignment_fixture(&storage).await;

    let err = storage
        .grade_submission(&GradeSubmissionParams {
            subject: "CS".to_string(),
            number: 3500,
            season: Season::Fall,
            year: 2024,
            category: "Homework".to_string(),
            asgname: "HW1".to_string(),
            uid: "u1000001".to_string(),
            score: 100,
        })
        .await
        .unwrap_err();
    assert!(err.is_rejection());
}

#[tokio::test]
async fn resubmission_replaces_text_and_resets_score() {
    let storage = setup().await;
    let (class_scope, assignment_scope) = seed_assignment_fixture(&storage).await;
    storage.enroll(&class_scope, "u1000001").await.unwrap();

    storage
        .submit_assignment_text(&submit_params(&assignment_scope, "u1000001", "draft"))
        .await
        .unwrap();
    storage
        .grade_submission(&GradeSubmissionParams {
            subject: "CS".to_string(),
            number: 3500,
            season: Season::Fall,
            year: 2024,
            category: "Homework".to_string(),
            asgname: "HW1".to_string(),
            uid: "u1000001".to_string(),
            score: 40,
        })
        .await
        .unwrap();

    storage
        .submit_assignment_text(&submit_params(&assignment_scope, "u1000001", "final"))
        .await
        .unwrap();

    let rows = Submissions::find().all(storage.connection()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text_contents, "final");
    assert_eq!(rows[0].score, 0);

    let text = storage
        .get_submission_text(&assignment_scope, "u1000001")
        .await
        .unwrap();
    assert_eq!(text.as_deref(), Some("final"));
}

#[tokio::test]
async fn assignment_contents_round_trip() {
    let storage = setup().await;
    let (_, assignment_scope) = seed_assignment_fixture(&storage).await;

    let contents = storage
        .get_assignment_contents(&assignment_scope)
        .await
        .unwrap();
    assert_eq!(contents.as_deref(), Some("Write a parser."));

    let missing = AssignmentScope {
        asgname: "HW9".to_string(),
        ..assignment_scope
    };
    assert!(storage.get_assignment_contents(&missing).await.unwrap().is_none());
}

#[tokio::test]
async fn submission_counts_are_aggregated_per_assignment() {
    let storage = setup().await;
    let (class_scope, assignment_scope) = seed_assignment_fixture(&storage).await;
    storage.enroll(&class_scope, "u1000001").await.unwrap();
    storage.enroll(&class_scope, "u1000002").await.unwrap();
    storage
        .submit_assignment_text(&submit_params(&assignment_scope, "u1000001", "one"))
        .await
        .unwrap();
    storage
        .submit_assignment_text(&submit_params(&assignment_scope, "u1000002", "two"))
        .await
        .unwrap();

    let rows = storage
        .get_assignments_in_category(&class_scope, Some("Homework"))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].submissions, 2);

    // category 缺省时覆盖全部分类
    let rows = storage
        .get_assignments_in_category(&class_scope, None)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

async fn seed_category(storage: &SeaOrmStorage, class_id: i64, name: &str) -> i64 {
    AssignmentCategoryActiveModel {
        class_id: Set(class_id),
        name: Set(name.to_string()),
        weight: Set(50),
        ..Default::default()
    }
    .insert(storage.connection())
    .await
    .expect("seed category")
    .id
}

async fn seed_assignment(storage: &SeaOrmStorage, category_id: i64, name: &str) -> i64 {
    AssignmentActiveModel {
        category_id: Set(category_id),
        name: Set(name.to_string()),
        due: Set(1_733_097_540),
        points: Set(100),
        contents: Set("Write a parser.".to_string()),
        submission_type: Set(true),
        ..Default::default()
    }
    .insert(storage.connection())
    .await
    .expect("seed assignment")
    .id
}

#[tokio::test]
async fn create_class_rejects_reversed_or_empty_slot() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_professor(&storage, "u0000001", "CS").await;
    seed_course(&storage, 0, "CS", 3500).await;

    let base = CreateClassParams {
        subject: "CS".to_string(),
        number: 3500,
        season: Season::Fall,
        year: 2024,
        start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        location: "WEB 101".to_string(),
        instructor: "u0000001".to_string(),
    };
    let err = storage.create_class(&base).await.unwrap_err();
    assert!(err.is_rejection());

    // 空区间同样拒绝
    let empty = CreateClassParams {
        end: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        ..base
    };
    let err = storage.create_class(&empty).await.unwrap_err();
    assert!(err.is_rejection());

    assert!(Classes::find().all(storage.connection()).await.unwrap().is_empty());
}

#[tokio::test]
async fn single_body_reads_reject_ambiguous_assignment_scope() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_professor(&storage, "u0000001", "CS").await;
    seed_student(&storage, "u1000001", "CS").await;
    seed_course(&storage, 0, "CS", 3500).await;
    // 同一课程同学期开两个课堂，各自带同名分类与作业
    let a = seed_class(&storage, 0, "Fall", 2024, "u0000001").await;
    let b = seed_class(&storage, 0, "Fall", 2024, "u0000001").await;
    let cat_a = seed_category(&storage, a, "Homework").await;
    let cat_b = seed_category(&storage, b, "Homework").await;
    seed_assignment(&storage, cat_a, "HW1").await;
    seed_assignment(&storage, cat_b, "HW1").await;

    let assignment_scope = AssignmentScope {
        subject: "CS".to_string(),
        number: 3500,
        season: Season::Fall,
        year: 2024,
        category: "Homework".to_string(),
        asgname: "HW1".to_string(),
    };

    let err = storage
        .get_assignment_contents(&assignment_scope)
        .await
        .unwrap_err();
    assert!(err.is_rejection());

    let err = storage
        .get_submission_text(&assignment_scope, "u1000001")
        .await
        .unwrap_err();
    assert!(err.is_rejection());
}

#[tokio::test]
async fn roster_shows_sentinel_grade_for_ungraded_students() {
    let storage = setup().await;
    seed_department(&storage, "CS", "Computer Science").await;
    seed_professor(&storage, "u0000001", "CS").await;
    seed_student(&storage, "u1000001", "CS").await;
    seed_course(&storage, 0, "CS", 3500).await;
    let class_id = seed_class(&storage, 0, "Fall", 2024, "u0000001").await;
    seed_enrollment(&storage, "u1000001", class_id, None).await;

    let roster = storage
        .get_students_in_class(&scope("CS", 3500, Season::Fall, 2024))
        .await
        .unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].grade, "--");
}
