use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AdministratorService;
use crate::models::WriteResult;
use crate::models::classes::requests::CreateClassParams;
use crate::utils::validate_uid;

/// 创建课堂；同学期同地点时间段冲突时回 {"success": false}
pub async fn create_class(
    service: &AdministratorService,
    request: &HttpRequest,
    params: CreateClassParams,
) -> ActixResult<HttpResponse> {
    if !validate_uid(&params.instructor) {
        info!(
            "CreateClass rejected malformed instructor uid: {}",
            params.instructor
        );
        return Ok(HttpResponse::Ok().json(WriteResult::fail()));
    }

    let storage = service.get_storage(request);

    match storage.create_class(&params).await {
        Ok(()) => {
            info!(
                "Class {} {} {} {} created at {}",
                params.subject, params.number, params.season, params.year, params.location
            );
            Ok(HttpResponse::Ok().json(WriteResult::ok()))
        }
        Err(e) => {
            if e.is_rejection() {
                info!(
                    "CreateClass rejected for {} {} {} {}: {}",
                    params.subject, params.number, params.season, params.year, e
                );
            } else {
                error!(
                    "Failed to create class {} {} {} {}: {}",
                    params.subject, params.number, params.season, params.year, e
                );
            }
            Ok(HttpResponse::Ok().json(WriteResult::fail()))
        }
    }
}
