//! HTTP 层集成测试
//!
//! 用 actix_web::test 驱动配置好的路由作用域，覆盖中间件的
//! 401/403 行为和"调用者 uid 取自令牌"的约定。令牌由
//! `JwtUtils::issue_token` 模拟外部签发方生成。

use std::sync::Arc;

use actix_web::{App, test, web};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, EntityTrait, Set};

use rust_lms_next::entity::prelude::*;
use rust_lms_next::routes::{configure_professor_routes, configure_student_routes};
use rust_lms_next::storage::Storage;
use rust_lms_next::storage::sea_orm_storage::SeaOrmStorage;
use rust_lms_next::utils::jwt::JwtUtils;

async fn setup_storage() -> SeaOrmStorage {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage::from_connection(db)
}

async fn seed_class_fixture(storage: &SeaOrmStorage) {
    DepartmentActiveModel {
        subject: Set("CS".to_string()),
        name: Set("Computer Science".to_string()),
    }
    .insert(storage.connection())
    .await
    .expect("seed department");

    ProfessorActiveModel {
        uid: Set("u0000001".to_string()),
        first_name: Set("Pat".to_string()),
        last_name: Set("Morgan".to_string()),
        works_in: Set("CS".to_string()),
    }
    .insert(storage.connection())
    .await
    .expect("seed professor");

    StudentActiveModel {
        uid: Set("u1000001".to_string()),
        first_name: Set("Sam".to_string()),
        last_name: Set("Rivera".to_string()),
        date_of_birth: Set(946_684_800),
        major: Set("CS".to_string()),
    }
    .insert(storage.connection())
    .await
    .expect("seed student");

    CourseActiveModel {
        catalog_id: Set(0),
        department: Set("CS".to_string()),
        number: Set(3500),
        name: Set("Software Practice".to_string()),
    }
    .insert(storage.connection())
    .await
    .expect("seed course");

    ClassActiveModel {
        offering: Set(0),
        season: Set("Fall".to_string()),
        year: Set(2024),
        start_time: Set(9 * 3600),
        end_time: Set(10 * 3600),
        location: Set("WEB 101".to_string()),
        taught_by: Set("u0000001".to_string()),
        ..Default::default()
    }
    .insert(storage.connection())
    .await
    .expect("seed class");
}

fn bearer(uid: &str, role: &str) -> (&'static str, String) {
    let token =
        JwtUtils::issue_token(uid, role, chrono::Duration::hours(1)).expect("issue token");
    ("Authorization", format!("Bearer {token}"))
}

macro_rules! test_app {
    ($storage:expr) => {{
        let storage: Arc<dyn Storage> = Arc::new($storage.clone());
        test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_student_routes)
                .configure(configure_professor_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn missing_or_malformed_token_is_unauthorized() {
    let storage = setup_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/v1/student/classes")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/v1/student/classes")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn wrong_role_is_forbidden() {
    let storage = setup_storage().await;
    let app = test_app!(storage);

    // 教授令牌进不了学生作用域
    let req = test::TestRequest::get()
        .uri("/api/v1/student/classes")
        .insert_header(bearer("u0000001", "Professor"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // 学生令牌进不了教授作用域
    let req = test::TestRequest::get()
        .uri("/api/v1/professor/classes")
        .insert_header(bearer("u1000001", "Student"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn enroll_takes_caller_uid_from_token() {
    let storage = setup_storage().await;
    seed_class_fixture(&storage).await;
    let app = test_app!(storage);

    // 查询串里没有 uid，选到谁名下由令牌决定
    let req = test::TestRequest::post()
        .uri("/api/v1/student/enroll?subject=CS&number=3500&season=Fall&year=2024")
        .insert_header(bearer("u1000001", "Student"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!({ "success": true }));

    let rows = Enrolled::find().all(storage.connection()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].student, "u1000001");

    // 选课后 GetMyClasses 能看到这一门
    let req = test::TestRequest::get()
        .uri("/api/v1/student/classes")
        .insert_header(bearer("u1000001", "Student"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let classes = body.as_array().expect("bare JSON array");
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["subject"], "CS");
    assert_eq!(classes[0]["grade"], "--");

    // 另一个学生的令牌看到的是空列表
    let req = test::TestRequest::get()
        .uri("/api/v1/student/classes")
        .insert_header(bearer("u1999999", "Student"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn gpa_reflects_token_identity() {
    let storage = setup_storage().await;
    seed_class_fixture(&storage).await;
    let classes = Classes::find().all(storage.connection()).await.unwrap();
    EnrolledActiveModel {
        student: Set("u1000001".to_string()),
        class_id: Set(classes[0].id),
        grade: Set(Some("A".to_string())),
        ..Default::default()
    }
    .insert(storage.connection())
    .await
    .expect("seed enrollment");
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/v1/student/gpa")
        .insert_header(bearer("u1000001", "Student"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!({ "gpa": 4.0 }));

    // 没有成绩的学生 GPA 为 0.0
    let req = test::TestRequest::get()
        .uri("/api/v1/student/gpa")
        .insert_header(bearer("u1999999", "Student"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!({ "gpa": 0.0 }));
}

#[actix_web::test]
async fn professor_classes_come_from_token_uid() {
    let storage = setup_storage().await;
    seed_class_fixture(&storage).await;
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/v1/professor/classes")
        .insert_header(bearer("u0000001", "Professor"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let classes = body.as_array().expect("bare JSON array");
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["subject"], "CS");
    assert_eq!(classes[0]["number"], 3500);

    // 不教课的教授看到空列表
    let req = test::TestRequest::get()
        .uri("/api/v1/professor/classes")
        .insert_header(bearer("u0000002", "Professor"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!([]));
}
