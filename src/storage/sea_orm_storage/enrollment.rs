//! 选课存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::enrolled::{
    ActiveModel as EnrolledActiveModel, Column as EnrolledColumn, Entity as Enrolled,
};
use crate::errors::{LMSError, Result};
use crate::models::classes::{requests::ClassScope, responses::EnrolledClass};
use crate::utils::NO_GRADE;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 选课
    ///
    /// 重复选同一课堂时拒绝。事务加 (student, class_id) 唯一索引
    /// 兜底并发写入。
    pub async fn enroll_impl(&self, scope: &ClassScope, uid: &str) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSError::database_operation(format!("开启事务失败: {e}")))?;

        let class_id = self.resolve_class_id(&txn, scope).await?;

        let already = Enrolled::find()
            .filter(EnrolledColumn::Student.eq(uid))
            .filter(EnrolledColumn::ClassId.eq(class_id))
            .count(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询选课记录失败: {e}")))?
            > 0;
        if already {
            return Err(LMSError::conflict(format!(
                "学生 {uid} 已选修该课堂: {} {} {} {}",
                scope.subject, scope.number, scope.season, scope.year
            )));
        }

        let model = EnrolledActiveModel {
            student: Set(uid.to_string()),
            class_id: Set(class_id),
            grade: Set(None),
            ..Default::default()
        };
        model
            .insert(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("创建选课记录失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LMSError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 某学生选修的课堂
    pub async fn get_enrolled_classes_impl(&self, uid: &str) -> Result<Vec<EnrolledClass>> {
        let enrollments = Enrolled::find()
            .filter(EnrolledColumn::Student.eq(uid))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询选课记录失败: {e}")))?;
        if enrollments.is_empty() {
            return Ok(Vec::new());
        }

        let class_ids: Vec<i64> = enrollments.iter().map(|e| e.class_id).collect();
        let classes = Classes::find()
            .filter(ClassColumn::Id.is_in(class_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课堂失败: {e}")))?;
        let course_map = self
            .load_courses_by_id(classes.iter().map(|c| c.offering))
            .await?;
        let class_map: HashMap<i64, crate::entity::classes::Model> =
            classes.into_iter().map(|c| (c.id, c)).collect();

        Ok(enrollments
            .into_iter()
            .filter_map(|e| {
                let class = class_map.get(&e.class_id)?;
                let course = course_map.get(&class.offering)?;
                Some(EnrolledClass {
                    subject: course.department.clone(),
                    number: course.number,
                    name: course.name.clone(),
                    season: class.season.clone(),
                    year: class.year,
                    grade: e.grade.unwrap_or_else(|| NO_GRADE.to_string()),
                })
            })
            .collect())
    }

    /// 某学生全部选课记录的字母等级，未评定的折叠为 "--"
    pub async fn get_letter_grades_impl(&self, uid: &str) -> Result<Vec<String>> {
        let enrollments = Enrolled::find()
            .filter(EnrolledColumn::Student.eq(uid))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(enrollments
            .into_iter()
            .map(|e| e.grade.unwrap_or_else(|| NO_GRADE.to_string()))
            .collect())
    }
}
