//! 课程目录存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::courses::{
    ActiveModel as CourseActiveModel, Column as CourseColumn, Entity as Courses,
};
use crate::entity::departments::{Column as DepartmentColumn, Entity as Departments};
use crate::entity::professors::{Column as ProfessorColumn, Entity as Professors};
use crate::errors::{LMSError, Result};
use crate::models::catalog::responses::{
    CatalogCourse, CatalogDepartment, CourseEntry, DepartmentEntry, ProfessorEntry,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出所有院系
    pub async fn list_departments_impl(&self) -> Result<Vec<DepartmentEntry>> {
        let rows = Departments::find()
            .order_by_asc(DepartmentColumn::Subject)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|d| DepartmentEntry {
                name: d.name,
                subject: d.subject,
            })
            .collect())
    }

    /// 课程总目录：所有院系各一条，嵌套其课程列表
    pub async fn get_catalog_impl(&self) -> Result<Vec<CatalogDepartment>> {
        let departments = Departments::find()
            .order_by_asc(DepartmentColumn::Subject)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询院系失败: {e}")))?;

        let courses = Courses::find()
            .order_by_asc(CourseColumn::Number)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课程失败: {e}")))?;

        // 按院系聚合课程
        let mut by_subject: HashMap<String, Vec<CatalogCourse>> = HashMap::new();
        for course in courses {
            by_subject
                .entry(course.department)
                .or_default()
                .push(CatalogCourse {
                    number: course.number,
                    cname: course.name,
                });
        }

        // 没有课程的院系也要出现，courses 为空数组
        Ok(departments
            .into_iter()
            .map(|d| {
                let courses = by_subject.remove(&d.subject).unwrap_or_default();
                CatalogDepartment {
                    subject: d.subject,
                    dname: d.name,
                    courses,
                }
            })
            .collect())
    }

    /// 列出某院系的课程
    pub async fn list_courses_in_department_impl(&self, subject: &str) -> Result<Vec<CourseEntry>> {
        let rows = Courses::find()
            .filter(CourseColumn::Department.eq(subject))
            .order_by_asc(CourseColumn::Number)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|c| CourseEntry {
                number: c.number,
                name: c.name,
            })
            .collect())
    }

    /// 列出某院系的教授
    pub async fn list_professors_in_department_impl(
        &self,
        subject: &str,
    ) -> Result<Vec<ProfessorEntry>> {
        let rows = Professors::find()
            .filter(ProfessorColumn::WorksIn.eq(subject))
            .order_by_asc(ProfessorColumn::Uid)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询教授失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|p| ProfessorEntry {
                lname: p.last_name,
                fname: p.first_name,
                uid: p.uid,
            })
            .collect())
    }

    /// 创建课程
    ///
    /// 目录号取全局最小的空闲非负整数。同院系同课号重复时拒绝；
    /// 事务加 (department, number) 唯一索引兜底并发写入。
    pub async fn create_course_impl(&self, subject: &str, number: i32, name: &str) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Courses::find()
            .filter(CourseColumn::Department.eq(subject))
            .filter(CourseColumn::Number.eq(number))
            .one(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课程失败: {e}")))?;
        if existing.is_some() {
            return Err(LMSError::conflict(format!("课程已存在: {subject} {number}")));
        }

        // 已用目录号升序扫描，找第一个空洞
        let used: Vec<i64> = Courses::find()
            .order_by_asc(CourseColumn::CatalogId)
            .all(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询目录号失败: {e}")))?
            .into_iter()
            .map(|c| c.catalog_id)
            .collect();

        let mut catalog_id = used.len() as i64;
        for (index, id) in used.iter().enumerate() {
            if *id > index as i64 {
                catalog_id = index as i64;
                break;
            }
        }

        let model = CourseActiveModel {
            catalog_id: Set(catalog_id),
            department: Set(subject.to_string()),
            number: Set(number),
            name: Set(name.to_string()),
        };
        model
            .insert(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("创建课程失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LMSError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }
}
