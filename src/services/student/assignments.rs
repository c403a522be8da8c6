use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::ClassScope;
use crate::models::submissions::requests::{SubmitTextParams, SubmitTextQuery};
use crate::models::{ApiResponse, ErrorCode, WriteResult};

/// 选课课堂内的作业及当前学生的得分；未提交的作业 score 为 null
pub async fn get_assignments_in_class(
    service: &StudentService,
    request: &HttpRequest,
    query: ClassScope,
) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(uid) => uid,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };
    let storage = service.get_storage(request);

    match storage.get_assignments_in_class(&query, &uid).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!(
                "Failed to list assignments in {} {} {} {} for {}: {}",
                query.subject, query.number, query.season, query.year, uid, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list assignments",
                )),
            )
        }
    }
}

/// 提交作业文本；重复提交覆盖原文并把分数清零
pub async fn submit_assignment_text(
    service: &StudentService,
    request: &HttpRequest,
    query: SubmitTextQuery,
) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(uid) => uid,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };
    let storage = service.get_storage(request);

    let params = SubmitTextParams {
        subject: query.subject,
        number: query.number,
        season: query.season,
        year: query.year,
        category: query.category,
        asgname: query.asgname,
        uid: uid.clone(),
        contents: query.contents,
    };

    match storage.submit_assignment_text(&params).await {
        Ok(()) => {
            info!("Student {} submitted text for {}", uid, params.asgname);
            Ok(HttpResponse::Ok().json(WriteResult::ok()))
        }
        Err(e) => {
            if e.is_rejection() {
                info!(
                    "SubmitAssignmentText rejected for {} / {}: {}",
                    uid, params.asgname, e
                );
            } else {
                error!(
                    "Failed to store submission by {} to {}: {}",
                    uid, params.asgname, e
                );
            }
            Ok(HttpResponse::Ok().json(WriteResult::fail()))
        }
    }
}
