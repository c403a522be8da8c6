use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ProfessorService;
use crate::models::assignments::requests::{CategoryFilterQuery, CreateAssignmentParams};
use crate::models::classes::requests::ClassScope;
use crate::models::{ApiResponse, ErrorCode, WriteResult};

/// 某分类的作业及提交数；category 缺省时返回课堂内全部分类的作业
pub async fn get_assignments_in_category(
    service: &ProfessorService,
    request: &HttpRequest,
    query: CategoryFilterQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let scope = ClassScope {
        subject: query.subject.clone(),
        number: query.number,
        season: query.season,
        year: query.year,
    };

    match storage
        .get_assignments_in_category(&scope, query.category.as_deref())
        .await
    {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!(
                "Failed to list assignments in {} {} {} {}: {}",
                query.subject, query.number, query.season, query.year, e
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

/// 新建作业；分类内重名回 {"success": false}
pub async fn create_assignment(
    service: &ProfessorService,
    request: &HttpRequest,
    params: CreateAssignmentParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_assignment(&params).await {
        Ok(()) => {
            info!(
                "Assignment {} created in category {} of {} {} {} {}",
                params.asgname,
                params.category,
                params.subject,
                params.number,
                params.season,
                params.year
            );
            Ok(HttpResponse::Ok().json(WriteResult::ok()))
        }
        Err(e) => {
            if e.is_rejection() {
                info!("CreateAssignment rejected for {}: {}", params.asgname, e);
            } else {
                error!("Failed to create assignment {}: {}", params.asgname, e);
            }
            Ok(HttpResponse::Ok().json(WriteResult::fail()))
        }
    }
}
