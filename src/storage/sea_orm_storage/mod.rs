//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod catalog;
mod classes;
mod enrollment;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{LMSError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use std::time::Duration;
use tracing::info;

use crate::entity;
use crate::models::classes::requests::ClassScope;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LMSError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 从已建立的连接构造（测试用）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 底层连接（测试用）
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LMSError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LMSError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LMSError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LMSError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 按 (院系, 课号) 查找课程目录号
    pub(crate) async fn find_catalog_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        subject: &str,
        number: i32,
    ) -> Result<Option<i64>> {
        let course = entity::prelude::Courses::find()
            .filter(entity::courses::Column::Department.eq(subject))
            .filter(entity::courses::Column::Number.eq(number))
            .one(conn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课程失败: {e}")))?;
        Ok(course.map(|c| c.catalog_id))
    }

    /// 按 (院系, 课号, 学期, 年份) 定位所有匹配课堂的 id
    ///
    /// 正常情况下至多一个，但四元组未设唯一约束（同一课程同学期
    /// 可以开多个课堂），读操作对所有匹配课堂取并集。
    pub(crate) async fn resolve_class_ids<C: ConnectionTrait>(
        &self,
        conn: &C,
        scope: &ClassScope,
    ) -> Result<Vec<i64>> {
        let Some(catalog_id) = self
            .find_catalog_id(conn, &scope.subject, scope.number)
            .await?
        else {
            return Ok(Vec::new());
        };

        let rows = entity::prelude::Classes::find()
            .filter(entity::classes::Column::Offering.eq(catalog_id))
            .filter(entity::classes::Column::Season.eq(scope.season.to_string()))
            .filter(entity::classes::Column::Year.eq(scope.year))
            .all(conn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课堂失败: {e}")))?;
        Ok(rows.into_iter().map(|c| c.id).collect())
    }

    /// 定位唯一课堂，写操作使用；匹配多个时报错而不是静默选第一个
    pub(crate) async fn resolve_class_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        scope: &ClassScope,
    ) -> Result<i64> {
        let ids = self.resolve_class_ids(conn, scope).await?;
        match ids.as_slice() {
            [] => Err(LMSError::not_found(format!(
                "课堂不存在: {} {} {} {}",
                scope.subject, scope.number, scope.season, scope.year
            ))),
            [id] => Ok(*id),
            _ => Err(LMSError::ambiguous_scope(format!(
                "课堂定位不唯一: {} {} {} {} 匹配 {} 个课堂",
                scope.subject,
                scope.number,
                scope.season,
                scope.year,
                ids.len()
            ))),
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        requests::{AssignmentScope, CreateAssignmentParams},
        responses::{AssignmentSummary, CategorySummary, StudentAssignment},
    },
    catalog::responses::{
        CatalogDepartment, ClassOffering, CourseEntry, DepartmentEntry, ProfessorEntry,
    },
    classes::{
        requests::CreateClassParams,
        responses::{EnrolledClass, EnrolledStudent, TaughtClass},
    },
    submissions::{
        requests::{GradeSubmissionParams, SubmitTextParams},
        responses::SubmissionRow,
    },
    users::responses::UserProfile,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 公共目录
    async fn list_departments(&self) -> Result<Vec<DepartmentEntry>> {
        self.list_departments_impl().await
    }

    async fn get_catalog(&self) -> Result<Vec<CatalogDepartment>> {
        self.get_catalog_impl().await
    }

    async fn list_courses_in_department(&self, subject: &str) -> Result<Vec<CourseEntry>> {
        self.list_courses_in_department_impl(subject).await
    }

    async fn list_professors_in_department(&self, subject: &str) -> Result<Vec<ProfessorEntry>> {
        self.list_professors_in_department_impl(subject).await
    }

    async fn get_class_offerings(&self, subject: &str, number: i32) -> Result<Vec<ClassOffering>> {
        self.get_class_offerings_impl(subject, number).await
    }

    async fn get_user_profile(&self, uid: &str) -> Result<Option<UserProfile>> {
        self.get_user_profile_impl(uid).await
    }

    async fn get_assignment_contents(&self, scope: &AssignmentScope) -> Result<Option<String>> {
        self.get_assignment_contents_impl(scope).await
    }

    async fn get_submission_text(
        &self,
        scope: &AssignmentScope,
        uid: &str,
    ) -> Result<Option<String>> {
        self.get_submission_text_impl(scope, uid).await
    }

    // 管理员
    async fn create_course(&self, subject: &str, number: i32, name: &str) -> Result<()> {
        self.create_course_impl(subject, number, name).await
    }

    async fn create_class(&self, params: &CreateClassParams) -> Result<()> {
        self.create_class_impl(params).await
    }

    // 教授
    async fn get_students_in_class(&self, scope: &ClassScope) -> Result<Vec<EnrolledStudent>> {
        self.get_students_in_class_impl(scope).await
    }

    async fn get_assignment_categories(&self, scope: &ClassScope) -> Result<Vec<CategorySummary>> {
        self.get_assignment_categories_impl(scope).await
    }

    async fn create_assignment_category(
        &self,
        scope: &ClassScope,
        category: &str,
        weight: i32,
    ) -> Result<()> {
        self.create_assignment_category_impl(scope, category, weight)
            .await
    }

    async fn get_assignments_in_category(
        &self,
        scope: &ClassScope,
        category: Option<&str>,
    ) -> Result<Vec<AssignmentSummary>> {
        self.get_assignments_in_category_impl(scope, category).await
    }

    async fn create_assignment(&self, params: &CreateAssignmentParams) -> Result<()> {
        self.create_assignment_impl(params).await
    }

    async fn get_submissions_to_assignment(
        &self,
        scope: &AssignmentScope,
    ) -> Result<Vec<SubmissionRow>> {
        self.get_submissions_to_assignment_impl(scope).await
    }

    async fn grade_submission(&self, params: &GradeSubmissionParams) -> Result<()> {
        self.grade_submission_impl(params).await
    }

    async fn get_classes_taught_by(&self, uid: &str) -> Result<Vec<TaughtClass>> {
        self.get_classes_taught_by_impl(uid).await
    }

    // 学生
    async fn get_enrolled_classes(&self, uid: &str) -> Result<Vec<EnrolledClass>> {
        self.get_enrolled_classes_impl(uid).await
    }

    async fn get_assignments_in_class(
        &self,
        scope: &ClassScope,
        uid: &str,
    ) -> Result<Vec<StudentAssignment>> {
        self.get_assignments_in_class_impl(scope, uid).await
    }

    async fn enroll(&self, scope: &ClassScope, uid: &str) -> Result<()> {
        self.enroll_impl(scope, uid).await
    }

    async fn submit_assignment_text(&self, params: &SubmitTextParams) -> Result<()> {
        self.submit_assignment_text_impl(params).await
    }

    async fn get_letter_grades(&self, uid: &str) -> Result<Vec<String>> {
        self.get_letter_grades_impl(uid).await
    }
}
