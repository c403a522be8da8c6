use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::AssignmentScope;
use crate::models::catalog::requests::{CourseQuery, SubjectQuery};
use crate::models::submissions::requests::SubmissionTextQuery;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::UidQuery;
use crate::services::common::CommonService;

// 懒加载的全局 COMMON_SERVICE 实例
static COMMON_SERVICE: Lazy<CommonService> = Lazy::new(CommonService::new_lazy);

// HTTP处理程序
pub async fn get_departments(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMMON_SERVICE.get_departments(&req).await
}

pub async fn get_catalog(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMMON_SERVICE.get_catalog(&req).await
}

pub async fn get_courses(
    req: HttpRequest,
    query: web::Query<SubjectQuery>,
) -> ActixResult<HttpResponse> {
    COMMON_SERVICE.get_courses(&req, query.into_inner()).await
}

pub async fn get_professors(
    req: HttpRequest,
    query: web::Query<SubjectQuery>,
) -> ActixResult<HttpResponse> {
    COMMON_SERVICE
        .get_professors(&req, query.into_inner())
        .await
}

pub async fn get_class_offerings(
    req: HttpRequest,
    query: web::Query<CourseQuery>,
) -> ActixResult<HttpResponse> {
    COMMON_SERVICE
        .get_class_offerings(&req, query.into_inner())
        .await
}

pub async fn get_user(req: HttpRequest, query: web::Query<UidQuery>) -> ActixResult<HttpResponse> {
    COMMON_SERVICE.get_user(&req, query.into_inner()).await
}

pub async fn get_assignment_contents(
    req: HttpRequest,
    query: web::Query<AssignmentScope>,
) -> ActixResult<HttpResponse> {
    COMMON_SERVICE
        .get_assignment_contents(&req, query.into_inner())
        .await
}

pub async fn get_submission_text(
    req: HttpRequest,
    query: web::Query<SubmissionTextQuery>,
) -> ActixResult<HttpResponse> {
    COMMON_SERVICE
        .get_submission_text(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_common_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/common")
            .wrap(middlewares::RequireRole::new_any(UserRole::all_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/departments", web::get().to(get_departments))
            .route("/catalog", web::get().to(get_catalog))
            .route("/courses", web::get().to(get_courses))
            .route("/professors", web::get().to(get_professors))
            .route("/offerings", web::get().to(get_class_offerings))
            .route("/user", web::get().to(get_user))
            .route("/assignment/contents", web::get().to(get_assignment_contents))
            .route("/submission/text", web::get().to(get_submission_text)),
    );
}
