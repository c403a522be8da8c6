use std::sync::Arc;

use crate::models::{
    assignments::{
        requests::{AssignmentScope, CreateAssignmentParams},
        responses::{AssignmentSummary, CategorySummary, StudentAssignment},
    },
    catalog::responses::{
        CatalogDepartment, ClassOffering, CourseEntry, DepartmentEntry, ProfessorEntry,
    },
    classes::{
        requests::{ClassScope, CreateClassParams},
        responses::{EnrolledClass, EnrolledStudent, TaughtClass},
    },
    submissions::{
        requests::{GradeSubmissionParams, SubmitTextParams},
        responses::SubmissionRow,
    },
    users::responses::UserProfile,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 数据存储层
///
/// 每个方法对应一个规格化的查询或写操作。写操作成功返回 Ok(())；
/// 冲突、目标不存在或课堂定位不唯一时返回携带对应错误变体的 Err，
/// 由服务层折叠为 `{"success": false}`。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 公共目录查询
    // 列出所有院系
    async fn list_departments(&self) -> Result<Vec<DepartmentEntry>>;
    // 课程总目录，按院系分组（无课程的院系也出现）
    async fn get_catalog(&self) -> Result<Vec<CatalogDepartment>>;
    // 列出某院系的课程
    async fn list_courses_in_department(&self, subject: &str) -> Result<Vec<CourseEntry>>;
    // 列出某院系的教授
    async fn list_professors_in_department(&self, subject: &str) -> Result<Vec<ProfessorEntry>>;
    // 列出某课程的全部开设课堂
    async fn get_class_offerings(&self, subject: &str, number: i32) -> Result<Vec<ClassOffering>>;
    // 按 学生 -> 教授 -> 管理员 的优先级解析 uid
    async fn get_user_profile(&self, uid: &str) -> Result<Option<UserProfile>>;
    // 读取作业题目内容
    async fn get_assignment_contents(&self, scope: &AssignmentScope) -> Result<Option<String>>;
    // 读取某学生的提交文本
    async fn get_submission_text(
        &self,
        scope: &AssignmentScope,
        uid: &str,
    ) -> Result<Option<String>>;

    /// 管理员写操作
    // 创建课程，目录号取最小空闲非负整数
    async fn create_course(&self, subject: &str, number: i32, name: &str) -> Result<()>;
    // 创建课堂，拒绝同学期同地点的时间段冲突
    async fn create_class(&self, params: &CreateClassParams) -> Result<()>;

    /// 教授操作
    // 某课堂的选课学生名单
    async fn get_students_in_class(&self, scope: &ClassScope) -> Result<Vec<EnrolledStudent>>;
    // 某课堂的作业分类
    async fn get_assignment_categories(&self, scope: &ClassScope) -> Result<Vec<CategorySummary>>;
    // 新建作业分类（分类名在课堂内唯一）
    async fn create_assignment_category(
        &self,
        scope: &ClassScope,
        category: &str,
        weight: i32,
    ) -> Result<()>;
    // 某分类（或全部分类）的作业及提交数
    async fn get_assignments_in_category(
        &self,
        scope: &ClassScope,
        category: Option<&str>,
    ) -> Result<Vec<AssignmentSummary>>;
    // 新建作业（作业名在分类内唯一）
    async fn create_assignment(&self, params: &CreateAssignmentParams) -> Result<()>;
    // 某作业的全部提交
    async fn get_submissions_to_assignment(
        &self,
        scope: &AssignmentScope,
    ) -> Result<Vec<SubmissionRow>>;
    // 评分：覆盖 (作业, 学生) 对应提交的分数
    async fn grade_submission(&self, params: &GradeSubmissionParams) -> Result<()>;
    // 某教授讲授的课堂
    async fn get_classes_taught_by(&self, uid: &str) -> Result<Vec<TaughtClass>>;

    /// 学生操作
    // 某学生选修的课堂（含等级，未评定为 "--"）
    async fn get_enrolled_classes(&self, uid: &str) -> Result<Vec<EnrolledClass>>;
    // 选课课堂内的作业及该学生得分（未提交为 null）
    async fn get_assignments_in_class(
        &self,
        scope: &ClassScope,
        uid: &str,
    ) -> Result<Vec<StudentAssignment>>;
    // 选课
    async fn enroll(&self, scope: &ClassScope, uid: &str) -> Result<()>;
    // 提交作业文本
    async fn submit_assignment_text(&self, params: &SubmitTextParams) -> Result<()>;
    // 某学生全部选课记录的字母等级（未评定为 "--"），供 GPA 计算
    async fn get_letter_grades(&self, uid: &str) -> Result<Vec<String>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
