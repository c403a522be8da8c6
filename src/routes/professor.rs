use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    AssignmentScope, CategoryFilterQuery, CreateAssignmentParams, CreateCategoryParams,
};
use crate::models::classes::requests::ClassScope;
use crate::models::submissions::requests::GradeSubmissionParams;
use crate::models::users::entities::UserRole;
use crate::services::professor::ProfessorService;

// 懒加载的全局 PROFESSOR_SERVICE 实例
static PROFESSOR_SERVICE: Lazy<ProfessorService> = Lazy::new(ProfessorService::new_lazy);

// HTTP处理程序
pub async fn get_my_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.get_my_classes(&req).await
}

pub async fn get_students_in_class(
    req: HttpRequest,
    query: web::Query<ClassScope>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .get_students_in_class(&req, query.into_inner())
        .await
}

pub async fn get_assignment_categories(
    req: HttpRequest,
    query: web::Query<ClassScope>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .get_assignment_categories(&req, query.into_inner())
        .await
}

pub async fn create_assignment_category(
    req: HttpRequest,
    params: web::Query<CreateCategoryParams>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .create_assignment_category(&req, params.into_inner())
        .await
}

pub async fn get_assignments_in_category(
    req: HttpRequest,
    query: web::Query<CategoryFilterQuery>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .get_assignments_in_category(&req, query.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    params: web::Query<CreateAssignmentParams>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .create_assignment(&req, params.into_inner())
        .await
}

pub async fn get_submissions_to_assignment(
    req: HttpRequest,
    query: web::Query<AssignmentScope>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .get_submissions_to_assignment(&req, query.into_inner())
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    params: web::Query<GradeSubmissionParams>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .grade_submission(&req, params.into_inner())
        .await
}

// 配置路由
pub fn configure_professor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/professor")
            .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/classes", web::get().to(get_my_classes))
            .route("/students", web::get().to(get_students_in_class))
            .route("/categories", web::get().to(get_assignment_categories))
            .route("/category", web::post().to(create_assignment_category))
            .route("/assignments", web::get().to(get_assignments_in_category))
            .route("/assignment", web::post().to(create_assignment))
            .route("/submissions", web::get().to(get_submissions_to_assignment))
            .route("/grade", web::post().to(grade_submission)),
    );
}
