use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CommonService;
use crate::models::assignments::requests::AssignmentScope;
use crate::models::submissions::requests::SubmissionTextQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 作业题目内容，纯文本返回；定位不到时 404 空体
pub async fn get_assignment_contents(
    service: &CommonService,
    request: &HttpRequest,
    query: AssignmentScope,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_contents(&query).await {
        Ok(Some(contents)) => Ok(HttpResponse::Ok()
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(contents)),
        Ok(None) => Ok(HttpResponse::NotFound()
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish()),
        // 定位不唯一等拒绝同样给不出单体结果，按未找到处理
        Err(e) if e.is_rejection() => {
            info!("GetAssignmentContents rejected for {}: {}", query.asgname, e);
            Ok(HttpResponse::NotFound()
                .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
                .finish())
        }
        Err(e) => {
            error!("Failed to load assignment contents: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load assignment contents",
                )),
            )
        }
    }
}

/// 某学生的提交文本，纯文本返回；定位不到时 404 空体
pub async fn get_submission_text(
    service: &CommonService,
    request: &HttpRequest,
    query: SubmissionTextQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let scope = AssignmentScope {
        subject: query.subject.clone(),
        number: query.number,
        season: query.season,
        year: query.year,
        category: query.category.clone(),
        asgname: query.asgname.clone(),
    };

    match storage.get_submission_text(&scope, &query.uid).await {
        Ok(Some(text)) => Ok(HttpResponse::Ok()
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(text)),
        Ok(None) => Ok(HttpResponse::NotFound()
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish()),
        // 定位不唯一等拒绝同样给不出单体结果，按未找到处理
        Err(e) if e.is_rejection() => {
            info!(
                "GetSubmissionText rejected for {} / {}: {}",
                query.uid, query.asgname, e
            );
            Ok(HttpResponse::NotFound()
                .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
                .finish())
        }
        Err(e) => {
            error!("Failed to load submission text for {}: {}", query.uid, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load submission text",
                )),
            )
        }
    }
}
