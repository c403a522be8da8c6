pub mod catalog;
pub mod contents;
pub mod user;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::AssignmentScope;
use crate::models::catalog::requests::{CourseQuery, SubjectQuery};
use crate::models::submissions::requests::SubmissionTextQuery;
use crate::models::users::requests::UidQuery;
use crate::storage::Storage;

/// 所有角色共用的查询服务
pub struct CommonService {
    storage: Option<Arc<dyn Storage>>,
}

impl CommonService {
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

    // 列出所有院系
    pub async fn get_departments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        catalog::get_departments(self, request).await
    }

    // 课程总目录
    pub async fn get_catalog(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        catalog::get_catalog(self, request).await
    }

    // 某院系的课程
    pub async fn get_courses(
        &self,
        request: &HttpRequest,
        query: SubjectQuery,
    ) -> ActixResult<HttpResponse> {
        catalog::get_courses(self, request, query).await
    }

    // 某院系的教授
    pub async fn get_professors(
        &self,
        request: &HttpRequest,
        query: SubjectQuery,
    ) -> ActixResult<HttpResponse> {
        catalog::get_professors(self, request, query).await
    }

    // 某课程的全部开设课堂
    pub async fn get_class_offerings(
        &self,
        request: &HttpRequest,
        query: CourseQuery,
    ) -> ActixResult<HttpResponse> {
        catalog::get_class_offerings(self, request, query).await
    }

    // 按 uid 解析用户
    pub async fn get_user(
        &self,
        request: &HttpRequest,
        query: UidQuery,
    ) -> ActixResult<HttpResponse> {
        user::get_user(self, request, query).await
    }

    // 作业题目内容
    pub async fn get_assignment_contents(
        &self,
        request: &HttpRequest,
        query: AssignmentScope,
    ) -> ActixResult<HttpResponse> {
        contents::get_assignment_contents(self, request, query).await
    }

    // 某学生的提交文本
    pub async fn get_submission_text(
        &self,
        request: &HttpRequest,
        query: SubmissionTextQuery,
    ) -> ActixResult<HttpResponse> {
        contents::get_submission_text(self, request, query).await
    }
}
