use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CommonService;
use crate::models::users::requests::UidQuery;
use crate::models::{ApiResponse, ErrorCode, WriteResult};
use crate::utils::validate_uid;

/// 按 学生 -> 教授 -> 管理员 的优先级解析 uid；
/// 未知 uid 回 {"success": false} 而不是 404
pub async fn get_user(
    service: &CommonService,
    request: &HttpRequest,
    query: UidQuery,
) -> ActixResult<HttpResponse> {
    if !validate_uid(&query.uid) {
        info!("GetUser rejected malformed uid: {}", query.uid);
        return Ok(HttpResponse::Ok().json(WriteResult::fail()));
    }

    let storage = service.get_storage(request);

    match storage.get_user_profile(&query.uid).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(profile)),
        Ok(None) => Ok(HttpResponse::Ok().json(WriteResult::fail())),
        Err(e) => {
            error!("Failed to resolve user {}: {}", query.uid, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to resolve user",
                )),
            )
        }
    }
}
