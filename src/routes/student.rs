use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::ClassScope;
use crate::models::submissions::requests::SubmitTextQuery;
use crate::models::users::entities::UserRole;
use crate::services::student::StudentService;

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn get_my_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_my_classes(&req).await
}

pub async fn enroll(req: HttpRequest, query: web::Query<ClassScope>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.enroll(&req, query.into_inner()).await
}

pub async fn get_assignments_in_class(
    req: HttpRequest,
    query: web::Query<ClassScope>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_assignments_in_class(&req, query.into_inner())
        .await
}

pub async fn submit_assignment_text(
    req: HttpRequest,
    query: web::Query<SubmitTextQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .submit_assignment_text(&req, query.into_inner())
        .await
}

pub async fn get_gpa(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_gpa(&req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/classes", web::get().to(get_my_classes))
            .route("/enroll", web::post().to(enroll))
            .route("/assignments", web::get().to(get_assignments_in_class))
            .route("/submission", web::post().to(submit_assignment_text))
            .route("/gpa", web::get().to(get_gpa)),
    );
}
