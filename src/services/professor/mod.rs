pub mod assignments;
pub mod categories;
pub mod classes;
pub mod submissions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{
    AssignmentScope, CategoryFilterQuery, CreateAssignmentParams, CreateCategoryParams,
};
use crate::models::classes::requests::ClassScope;
use crate::models::submissions::requests::GradeSubmissionParams;
use crate::storage::Storage;

/// 教授操作服务
pub struct ProfessorService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfessorService {
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

    // 我讲授的课堂
    pub async fn get_my_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        classes::get_my_classes(self, request).await
    }

    // 某课堂的学生名单
    pub async fn get_students_in_class(
        &self,
        request: &HttpRequest,
        query: ClassScope,
    ) -> ActixResult<HttpResponse> {
        classes::get_students_in_class(self, request, query).await
    }

    // 某课堂的作业分类
    pub async fn get_assignment_categories(
        &self,
        request: &HttpRequest,
        query: ClassScope,
    ) -> ActixResult<HttpResponse> {
        categories::get_assignment_categories(self, request, query).await
    }

    // 新建作业分类
    pub async fn create_assignment_category(
        &self,
        request: &HttpRequest,
        params: CreateCategoryParams,
    ) -> ActixResult<HttpResponse> {
        categories::create_assignment_category(self, request, params).await
    }

    // 某分类（或全部）的作业
    pub async fn get_assignments_in_category(
        &self,
        request: &HttpRequest,
        query: CategoryFilterQuery,
    ) -> ActixResult<HttpResponse> {
        assignments::get_assignments_in_category(self, request, query).await
    }

    // 新建作业
    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        params: CreateAssignmentParams,
    ) -> ActixResult<HttpResponse> {
        assignments::create_assignment(self, request, params).await
    }

    // 某作业的全部提交
    pub async fn get_submissions_to_assignment(
        &self,
        request: &HttpRequest,
        query: AssignmentScope,
    ) -> ActixResult<HttpResponse> {
        submissions::get_submissions_to_assignment(self, request, query).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        params: GradeSubmissionParams,
    ) -> ActixResult<HttpResponse> {
        submissions::grade_submission(self, request, params).await
    }
}
