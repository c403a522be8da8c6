use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ProfessorService;
use crate::models::assignments::requests::AssignmentScope;
use crate::models::submissions::requests::GradeSubmissionParams;
use crate::models::{ApiResponse, ErrorCode, WriteResult};
use crate::utils::validate_uid;

/// 某作业的全部提交
pub async fn get_submissions_to_assignment(
    service: &ProfessorService,
    request: &HttpRequest,
    query: AssignmentScope,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_submissions_to_assignment(&query).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!(
                "Failed to list submissions to {} in {} {}: {}",
                query.asgname, query.subject, query.number, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list submissions",
                )),
            )
        }
    }
}

/// 评分；提交不存在时回 {"success": false}
pub async fn grade_submission(
    service: &ProfessorService,
    request: &HttpRequest,
    params: GradeSubmissionParams,
) -> ActixResult<HttpResponse> {
    if !validate_uid(&params.uid) {
        info!("GradeSubmission rejected malformed uid: {}", params.uid);
        return Ok(HttpResponse::Ok().json(WriteResult::fail()));
    }

    let storage = service.get_storage(request);

    match storage.grade_submission(&params).await {
        Ok(()) => {
            info!(
                "Submission by {} to {} graded {} points",
                params.uid, params.asgname, params.score
            );
            Ok(HttpResponse::Ok().json(WriteResult::ok()))
        }
        Err(e) => {
            if e.is_rejection() {
                info!(
                    "GradeSubmission rejected for {} / {}: {}",
                    params.uid, params.asgname, e
                );
            } else {
                error!(
                    "Failed to grade submission by {} to {}: {}",
                    params.uid, params.asgname, e
                );
            }
            Ok(HttpResponse::Ok().json(WriteResult::fail()))
        }
    }
}
