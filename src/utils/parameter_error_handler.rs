//! 请求参数解析错误处理
//!
//! 把 actix-web 默认的纯文本 400 响应替换为统一的 JSON 信封。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query parameter parse error on {}: {}", req.path(), err);
    let body = ApiResponse::error_empty(ErrorCode::BadRequest, format!("Invalid query: {err}"));
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload parse error on {}: {}", req.path(), err);
    let body = ApiResponse::error_empty(ErrorCode::BadRequest, format!("Invalid JSON: {err}"));
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
