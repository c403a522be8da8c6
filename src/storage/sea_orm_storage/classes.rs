//! 课堂存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classes::{
    ActiveModel as ClassActiveModel, Column as ClassColumn, Entity as Classes,
};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrolled::{Column as EnrolledColumn, Entity as Enrolled};
use crate::entity::professors::{Column as ProfessorColumn, Entity as Professors};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{LMSError, Result};
use crate::models::catalog::responses::ClassOffering;
use crate::models::classes::{
    requests::{ClassScope, CreateClassParams},
    responses::{EnrolledStudent, TaughtClass},
};
use crate::utils::{NO_GRADE, date_from_timestamp, seconds_from_midnight, time_of_day};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 某课程的全部开设课堂，含任课教授姓名
    pub async fn get_class_offerings_impl(
        &self,
        subject: &str,
        number: i32,
    ) -> Result<Vec<ClassOffering>> {
        let Some(catalog_id) = self.find_catalog_id(&self.db, subject, number).await? else {
            return Ok(Vec::new());
        };

        let classes = Classes::find()
            .filter(ClassColumn::Offering.eq(catalog_id))
            .order_by_asc(ClassColumn::Year)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课堂失败: {e}")))?;

        // 批量查任课教授，按 uid 建映射
        let professor_uids: Vec<String> = classes.iter().map(|c| c.taught_by.clone()).collect();
        let professors = Professors::find()
            .filter(ProfessorColumn::Uid.is_in(professor_uids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询教授失败: {e}")))?;
        let professor_map: HashMap<String, (String, String)> = professors
            .into_iter()
            .map(|p| (p.uid, (p.first_name, p.last_name)))
            .collect();

        Ok(classes
            .into_iter()
            .map(|c| {
                let (fname, lname) = professor_map
                    .get(&c.taught_by)
                    .cloned()
                    .unwrap_or_default();
                ClassOffering {
                    season: c.season,
                    year: c.year,
                    location: c.location,
                    start: time_of_day(c.start_time),
                    end: time_of_day(c.end_time),
                    fname,
                    lname,
                }
            })
            .collect())
    }

    /// 创建课堂
    ///
    /// 拒绝同 (学期, 年份) 内同一地点时间段重叠的课堂。
    /// 区间按半开 [start, end) 比较，首尾相接不算冲突。
    pub async fn create_class_impl(&self, params: &CreateClassParams) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSError::database_operation(format!("开启事务失败: {e}")))?;

        let catalog_id = self
            .find_catalog_id(&txn, &params.subject, params.number)
            .await?
            .ok_or_else(|| {
                LMSError::not_found(format!("课程不存在: {} {}", params.subject, params.number))
            })?;

        let professor_exists = Professors::find()
            .filter(ProfessorColumn::Uid.eq(params.instructor.as_str()))
            .count(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询教授失败: {e}")))?
            > 0;
        if !professor_exists {
            return Err(LMSError::not_found(format!(
                "教授不存在: {}",
                params.instructor
            )));
        }

        let start = seconds_from_midnight(params.start);
        let end = seconds_from_midnight(params.end);

        // 倒置或空的时间段会让重叠判定空洞地通过，先行拒绝
        if end <= start {
            return Err(LMSError::validation(format!(
                "无效的上课时间段: {} 不早于 {}",
                params.start, params.end
            )));
        }

        // 同学期同地点的课堂逐一比对时间段
        let same_slot = Classes::find()
            .filter(ClassColumn::Season.eq(params.season.to_string()))
            .filter(ClassColumn::Year.eq(params.year))
            .filter(ClassColumn::Location.eq(params.location.as_str()))
            .all(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课堂失败: {e}")))?;

        for other in &same_slot {
            if start < other.end_time && other.start_time < end {
                return Err(LMSError::conflict(format!(
                    "时间冲突: {} 在 {} {} 已有课堂占用该时间段",
                    params.location, params.season, params.year
                )));
            }
        }

        let model = ClassActiveModel {
            offering: Set(catalog_id),
            season: Set(params.season.to_string()),
            year: Set(params.year),
            start_time: Set(start),
            end_time: Set(end),
            location: Set(params.location.clone()),
            taught_by: Set(params.instructor.clone()),
            ..Default::default()
        };
        model
            .insert(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("创建课堂失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LMSError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 某教授讲授的课堂
    pub async fn get_classes_taught_by_impl(&self, uid: &str) -> Result<Vec<TaughtClass>> {
        let classes = Classes::find()
            .filter(ClassColumn::TaughtBy.eq(uid))
            .order_by_asc(ClassColumn::Year)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课堂失败: {e}")))?;

        let course_map = self
            .load_courses_by_id(classes.iter().map(|c| c.offering))
            .await?;

        Ok(classes
            .into_iter()
            .filter_map(|c| {
                course_map.get(&c.offering).map(|course| TaughtClass {
                    subject: course.department.clone(),
                    number: course.number,
                    name: course.name.clone(),
                    season: c.season,
                    year: c.year,
                })
            })
            .collect())
    }

    /// 某课堂的选课学生名单（多个匹配课堂时取并集）
    pub async fn get_students_in_class_impl(
        &self,
        scope: &ClassScope,
    ) -> Result<Vec<EnrolledStudent>> {
        let class_ids = self.resolve_class_ids(&self.db, scope).await?;
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let enrollments = Enrolled::find()
            .filter(EnrolledColumn::ClassId.is_in(class_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询选课记录失败: {e}")))?;

        let student_uids: Vec<String> = enrollments.iter().map(|e| e.student.clone()).collect();
        let students = Students::find()
            .filter(StudentColumn::Uid.is_in(student_uids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询学生失败: {e}")))?;
        let student_map: HashMap<String, crate::entity::students::Model> =
            students.into_iter().map(|s| (s.uid.clone(), s)).collect();

        Ok(enrollments
            .into_iter()
            .filter_map(|e| {
                student_map.get(&e.student).map(|s| EnrolledStudent {
                    fname: s.first_name.clone(),
                    lname: s.last_name.clone(),
                    uid: s.uid.clone(),
                    dob: date_from_timestamp(s.date_of_birth),
                    grade: e.grade.unwrap_or_else(|| NO_GRADE.to_string()),
                })
            })
            .collect())
    }

    /// 按目录号批量加载课程
    pub(crate) async fn load_courses_by_id(
        &self,
        ids: impl Iterator<Item = i64>,
    ) -> Result<HashMap<i64, crate::entity::courses::Model>> {
        let ids: Vec<i64> = ids.collect::<std::collections::HashSet<_>>().into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let courses = Courses::find()
            .filter(CourseColumn::CatalogId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询课程失败: {e}")))?;
        Ok(courses.into_iter().map(|c| (c.catalog_id, c)).collect())
    }
}
