//! 提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::submissions::{
    ActiveModel as SubmissionActiveModel, Column as SubmissionColumn, Entity as Submissions,
};
use crate::errors::{LMSError, Result};
use crate::models::assignments::requests::AssignmentScope;
use crate::models::submissions::{
    requests::{GradeSubmissionParams, SubmitTextParams},
    responses::SubmissionRow,
};
use crate::utils::datetime_from_timestamp;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 某作业的全部提交，含提交者姓名
    pub async fn get_submissions_to_assignment_impl(
        &self,
        scope: &AssignmentScope,
    ) -> Result<Vec<SubmissionRow>> {
        let assignment_ids = self.resolve_assignment_ids(&self.db, scope).await?;
        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let submissions = Submissions::find()
            .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询提交失败: {e}")))?;

        let student_uids: Vec<String> = submissions.iter().map(|s| s.student.clone()).collect();
        let students = Students::find()
            .filter(StudentColumn::Uid.is_in(student_uids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询学生失败: {e}")))?;
        let student_map: HashMap<String, (String, String)> = students
            .into_iter()
            .map(|s| (s.uid, (s.first_name, s.last_name)))
            .collect();

        Ok(submissions
            .into_iter()
            .map(|s| {
                let (fname, lname) = student_map.get(&s.student).cloned().unwrap_or_default();
                SubmissionRow {
                    uid: s.student,
                    fname,
                    lname,
                    time: datetime_from_timestamp(s.time),
                    score: s.score,
                }
            })
            .collect())
    }

    /// 评分：覆盖 (作业, 学生) 对应提交的分数
    ///
    /// 提交不存在时报 NotFound，由服务层折叠为 {"success": false}。
    pub async fn grade_submission_impl(&self, params: &GradeSubmissionParams) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSError::database_operation(format!("开启事务失败: {e}")))?;

        let scope = AssignmentScope {
            subject: params.subject.clone(),
            number: params.number,
            season: params.season,
            year: params.year,
            category: params.category.clone(),
            asgname: params.asgname.clone(),
        };
        let assignment_id = self.resolve_assignment_id(&txn, &scope).await?;

        let submission = Submissions::find()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .filter(SubmissionColumn::Student.eq(params.uid.as_str()))
            .one(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询提交失败: {e}")))?
            .ok_or_else(|| {
                LMSError::not_found(format!(
                    "提交不存在: {} 未提交 {}",
                    params.uid, params.asgname
                ))
            })?;

        let mut model: SubmissionActiveModel = submission.into();
        model.score = Set(params.score);
        model
            .update(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("更新分数失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LMSError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 提交作业文本
    ///
    /// 首次提交插入新行，分数初始为 0；重复提交覆盖文本和时间并
    /// 把分数重置为 0。(assignment, student) 唯一索引兜底并发写入。
    pub async fn submit_assignment_text_impl(&self, params: &SubmitTextParams) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSError::database_operation(format!("开启事务失败: {e}")))?;

        let scope = AssignmentScope {
            subject: params.subject.clone(),
            number: params.number,
            season: params.season,
            year: params.year,
            category: params.category.clone(),
            asgname: params.asgname.clone(),
        };
        let assignment_id = self.resolve_assignment_id(&txn, &scope).await?;

        let now = chrono::Utc::now().timestamp();
        let existing = Submissions::find()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .filter(SubmissionColumn::Student.eq(params.uid.as_str()))
            .one(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询提交失败: {e}")))?;

        match existing {
            Some(submission) => {
                let mut model: SubmissionActiveModel = submission.into();
                model.text_contents = Set(params.contents.clone());
                model.time = Set(now);
                model.score = Set(0);
                model
                    .update(&txn)
                    .await
                    .map_err(|e| LMSError::database_operation(format!("更新提交失败: {e}")))?;
            }
            None => {
                let model = SubmissionActiveModel {
                    assignment_id: Set(assignment_id),
                    student: Set(params.uid.clone()),
                    time: Set(now),
                    score: Set(0),
                    text_contents: Set(params.contents.clone()),
                    ..Default::default()
                };
                model
                    .insert(&txn)
                    .await
                    .map_err(|e| LMSError::database_operation(format!("创建提交失败: {e}")))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| LMSError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 读取某学生的提交文本
    ///
    /// 单体结果不能从多个匹配里随便挑一个，定位不唯一时报错。
    pub async fn get_submission_text_impl(
        &self,
        scope: &AssignmentScope,
        uid: &str,
    ) -> Result<Option<String>> {
        let assignment_id = match self.resolve_assignment_ids(&self.db, scope).await?.as_slice() {
            [] => return Ok(None),
            [id] => *id,
            ids => {
                return Err(LMSError::ambiguous_scope(format!(
                    "作业定位不唯一: {} 匹配 {} 个作业",
                    scope.asgname,
                    ids.len()
                )));
            }
        };

        let submission = Submissions::find()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .filter(SubmissionColumn::Student.eq(uid))
            .one(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(submission.map(|s| s.text_contents))
    }
}
