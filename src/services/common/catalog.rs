use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CommonService;
use crate::models::catalog::requests::{CourseQuery, SubjectQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_departments(
    service: &CommonService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!("Failed to list departments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list departments",
                )),
            )
        }
    }
}

pub async fn get_catalog(
    service: &CommonService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_catalog().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!("Failed to load course catalog: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load course catalog",
                )),
            )
        }
    }
}

pub async fn get_courses(
    service: &CommonService,
    request: &HttpRequest,
    query: SubjectQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses_in_department(&query.subject).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!("Failed to list courses in {}: {}", query.subject, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list courses",
                )),
            )
        }
    }
}

pub async fn get_professors(
    service: &CommonService,
    request: &HttpRequest,
    query: SubjectQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_professors_in_department(&query.subject).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!("Failed to list professors in {}: {}", query.subject, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list professors",
                )),
            )
        }
    }
}

pub async fn get_class_offerings(
    service: &CommonService,
    request: &HttpRequest,
    query: CourseQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .get_class_offerings(&query.subject, query.number)
        .await
    {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!(
                "Failed to list class offerings for {} {}: {}",
                query.subject, query.number, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list class offerings",
                )),
            )
        }
    }
}
