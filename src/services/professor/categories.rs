use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ProfessorService;
use crate::models::assignments::requests::CreateCategoryParams;
use crate::models::classes::requests::ClassScope;
use crate::models::{ApiResponse, ErrorCode, WriteResult};

/// 某课堂的作业分类
pub async fn get_assignment_categories(
    service: &ProfessorService,
    request: &HttpRequest,
    query: ClassScope,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_categories(&query).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!(
                "Failed to list assignment categories in {} {} {} {}: {}",
                query.subject, query.number, query.season, query.year, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list assignment categories",
                )),
            )
        }
    }
}

/// 新建作业分类；课堂内重名回 {"success": false}
pub async fn create_assignment_category(
    service: &ProfessorService,
    request: &HttpRequest,
    params: CreateCategoryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let scope = ClassScope {
        subject: params.subject.clone(),
        number: params.number,
        season: params.season,
        year: params.year,
    };

    match storage
        .create_assignment_category(&scope, &params.category, params.catweight)
        .await
    {
        Ok(()) => {
            info!(
                "Assignment category {} created in {} {} {} {}",
                params.category, params.subject, params.number, params.season, params.year
            );
            Ok(HttpResponse::Ok().json(WriteResult::ok()))
        }
        Err(e) => {
            if e.is_rejection() {
                info!(
                    "CreateAssignmentCategory rejected for {}: {}",
                    params.category, e
                );
            } else {
                error!(
                    "Failed to create assignment category {}: {}",
                    params.category, e
                );
            }
            Ok(HttpResponse::Ok().json(WriteResult::fail()))
        }
    }
}
