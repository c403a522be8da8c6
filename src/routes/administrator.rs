use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::catalog::requests::CreateCourseParams;
use crate::models::classes::requests::CreateClassParams;
use crate::models::users::entities::UserRole;
use crate::services::administrator::AdministratorService;

// 懒加载的全局 ADMINISTRATOR_SERVICE 实例
static ADMINISTRATOR_SERVICE: Lazy<AdministratorService> =
    Lazy::new(AdministratorService::new_lazy);

// HTTP处理程序
pub async fn create_course(
    req: HttpRequest,
    params: web::Query<CreateCourseParams>,
) -> ActixResult<HttpResponse> {
    ADMINISTRATOR_SERVICE
        .create_course(&req, params.into_inner())
        .await
}

pub async fn create_class(
    req: HttpRequest,
    params: web::Query<CreateClassParams>,
) -> ActixResult<HttpResponse> {
    ADMINISTRATOR_SERVICE
        .create_class(&req, params.into_inner())
        .await
}

// 配置路由
pub fn configure_administrator_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/administrator")
            .wrap(middlewares::RequireRole::new_any(
                UserRole::administrator_roles(),
            ))
            .wrap(middlewares::RequireJWT)
            .route("/course", web::post().to(create_course))
            .route("/class", web::post().to(create_class)),
    );
}
