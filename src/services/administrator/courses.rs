use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AdministratorService;
use crate::models::WriteResult;
use crate::models::catalog::requests::CreateCourseParams;

/// 创建课程；重复的 (subject, number) 回 {"success": false}。
/// 写失败不外泄细节，同样折叠为 {"success": false}。
pub async fn create_course(
    service: &AdministratorService,
    request: &HttpRequest,
    params: CreateCourseParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .create_course(&params.subject, params.number, &params.name)
        .await
    {
        Ok(()) => {
            info!("Course {} {} created", params.subject, params.number);
            Ok(HttpResponse::Ok().json(WriteResult::ok()))
        }
        Err(e) => {
            if e.is_rejection() {
                info!(
                    "CreateCourse rejected for {} {}: {}",
                    params.subject, params.number, e
                );
            } else {
                error!(
                    "Failed to create course {} {}: {}",
                    params.subject, params.number, e
                );
            }
            Ok(HttpResponse::Ok().json(WriteResult::fail()))
        }
    }
}
