pub mod classes;
pub mod courses;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::catalog::requests::CreateCourseParams;
use crate::models::classes::requests::CreateClassParams;
use crate::storage::Storage;

/// 管理员操作服务
pub struct AdministratorService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdministratorService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建课程
    pub async fn create_course(
        &self,
        request: &HttpRequest,
        params: CreateCourseParams,
    ) -> ActixResult<HttpResponse> {
        courses::create_course(self, request, params).await
    }

    // 创建课堂
    pub async fn create_class(
        &self,
        request: &HttpRequest,
        params: CreateClassParams,
    ) -> ActixResult<HttpResponse> {
        classes::create_class(self, request, params).await
    }
}
