pub mod assignments;
pub mod classes;
pub mod gpa;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::ClassScope;
use crate::models::submissions::requests::SubmitTextQuery;
use crate::storage::Storage;

/// 学生操作服务；调用者 uid 一律取自令牌
pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 我选修的课堂
    pub async fn get_my_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        classes::get_my_classes(self, request).await
    }

    // 选课
    pub async fn enroll(
        &self,
        request: &HttpRequest,
        query: ClassScope,
    ) -> ActixResult<HttpResponse> {
        classes::enroll(self, request, query).await
    }

    // 选课课堂内的作业及我的得分
    pub async fn get_assignments_in_class(
        &self,
        request: &HttpRequest,
        query: ClassScope,
    ) -> ActixResult<HttpResponse> {
        assignments::get_assignments_in_class(self, request, query).await
    }

    // 提交作业文本
    pub async fn submit_assignment_text(
        &self,
        request: &HttpRequest,
        query: SubmitTextQuery,
    ) -> ActixResult<HttpResponse> {
        assignments::submit_assignment_text(self, request, query).await
    }

    // GPA
    pub async fn get_gpa(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        gpa::get_gpa(self, request).await
    }
}
