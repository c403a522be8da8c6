//! 作业与作业分类存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignment_categories::{
    ActiveModel as AssignmentCategoryActiveModel, Column as CategoryColumn,
    Entity as AssignmentCategories,
};
use crate::entity::assignments::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn, Entity as Assignments,
};
use crate::entity::enrolled::{Column as EnrolledColumn, Entity as Enrolled};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{LMSError, Result};
use crate::models::assignments::{
    requests::{AssignmentScope, CreateAssignmentParams},
    responses::{AssignmentSummary, CategorySummary, StudentAssignment},
};
use crate::models::classes::requests::ClassScope;
use crate::utils::datetime_from_timestamp;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 定位唯一作业 id，写操作使用
    pub(crate) async fn resolve_assignment_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        scope: &AssignmentScope,
    ) -> Result<i64> {
        let class_id = self.resolve_class_id(conn, &scope.class()).await?;

        let category = AssignmentCategories::find()
            .filter(CategoryColumn::ClassId.eq(class_id))
            .filter(CategoryColumn::Name.eq(scope.category.as_str()))
            .one(conn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业分类失败: {e}")))?
            .ok_or_else(|| LMSError::not_found(format!("作业分类不存在: {}", scope.category)))?;

        let assignment = Assignments::find()
            .filter(AssignmentColumn::CategoryId.eq(category.id))
            .filter(AssignmentColumn::Name.eq(scope.asgname.as_str()))
            .one(conn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业失败: {e}")))?
            .ok_or_else(|| LMSError::not_found(format!("作业不存在: {}", scope.asgname)))?;

        Ok(assignment.id)
    }

    /// 定位所有匹配作业的 id，读操作对匹配课堂取并集
    pub(crate) async fn resolve_assignment_ids<C: ConnectionTrait>(
        &self,
        conn: &C,
        scope: &AssignmentScope,
    ) -> Result<Vec<i64>> {
        let class_ids = self.resolve_class_ids(conn, &scope.class()).await?;
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i64> = AssignmentCategories::find()
            .filter(CategoryColumn::ClassId.is_in(class_ids))
            .filter(CategoryColumn::Name.eq(scope.category.as_str()))
            .all(conn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业分类失败: {e}")))?
            .into_iter()
            .map(|c| c.id)
            .collect();
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let assignments = Assignments::find()
            .filter(AssignmentColumn::CategoryId.is_in(category_ids))
            .filter(AssignmentColumn::Name.eq(scope.asgname.as_str()))
            .all(conn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业失败: {e}")))?;
        Ok(assignments.into_iter().map(|a| a.id).collect())
    }

    /// 某课堂的作业分类
    pub async fn get_assignment_categories_impl(
        &self,
        scope: &ClassScope,
    ) -> Result<Vec<CategorySummary>> {
        let class_ids = self.resolve_class_ids(&self.db, scope).await?;
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let categories = AssignmentCategories::find()
            .filter(CategoryColumn::ClassId.is_in(class_ids))
            .order_by_asc(CategoryColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业分类失败: {e}")))?;

        Ok(categories
            .into_iter()
            .map(|c| CategorySummary {
                name: c.name,
                weight: c.weight,
            })
            .collect())
    }

    /// 新建作业分类，分类名在课堂内唯一
    pub async fn create_assignment_category_impl(
        &self,
        scope: &ClassScope,
        category: &str,
        weight: i32,
    ) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSError::database_operation(format!("开启事务失败: {e}")))?;

        let class_id = self.resolve_class_id(&txn, scope).await?;

        let duplicate = AssignmentCategories::find()
            .filter(CategoryColumn::ClassId.eq(class_id))
            .filter(CategoryColumn::Name.eq(category))
            .count(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业分类失败: {e}")))?
            > 0;
        if duplicate {
            return Err(LMSError::conflict(format!("作业分类已存在: {category}")));
        }

        let model = AssignmentCategoryActiveModel {
            class_id: Set(class_id),
            name: Set(category.to_string()),
            weight: Set(weight),
            ..Default::default()
        };
        model
            .insert(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("创建作业分类失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LMSError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 某分类的作业及提交数；category 缺省时覆盖课堂内全部分类
    pub async fn get_assignments_in_category_impl(
        &self,
        scope: &ClassScope,
        category: Option<&str>,
    ) -> Result<Vec<AssignmentSummary>> {
        let class_ids = self.resolve_class_ids(&self.db, scope).await?;
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut select = AssignmentCategories::find().filter(CategoryColumn::ClassId.is_in(class_ids));
        if let Some(name) = category {
            select = select.filter(CategoryColumn::Name.eq(name));
        }
        let categories = select
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业分类失败: {e}")))?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_names: HashMap<i64, String> =
            categories.iter().map(|c| (c.id, c.name.clone())).collect();
        let category_ids: Vec<i64> = categories.iter().map(|c| c.id).collect();

        let assignments = Assignments::find()
            .filter(AssignmentColumn::CategoryId.is_in(category_ids))
            .order_by_asc(AssignmentColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业失败: {e}")))?;

        // 按作业聚合提交数
        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
        let mut submission_counts: HashMap<i64, i64> = HashMap::new();
        if !assignment_ids.is_empty() {
            let submissions = Submissions::find()
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                .all(&self.db)
                .await
                .map_err(|e| LMSError::database_operation(format!("查询提交失败: {e}")))?;
            for sub in submissions {
                *submission_counts.entry(sub.assignment_id).or_default() += 1;
            }
        }

        Ok(assignments
            .into_iter()
            .map(|a| AssignmentSummary {
                cname: category_names.get(&a.category_id).cloned().unwrap_or_default(),
                due: datetime_from_timestamp(a.due),
                submissions: submission_counts.get(&a.id).copied().unwrap_or(0),
                aname: a.name,
            })
            .collect())
    }

    /// 新建作业，作业名在分类内唯一
    pub async fn create_assignment_impl(&self, params: &CreateAssignmentParams) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSError::database_operation(format!("开启事务失败: {e}")))?;

        let class_id = self
            .resolve_class_id(
                &txn,
                &ClassScope {
                    subject: params.subject.clone(),
                    number: params.number,
                    season: params.season,
                    year: params.year,
                },
            )
            .await?;

        let category = AssignmentCategories::find()
            .filter(CategoryColumn::ClassId.eq(class_id))
            .filter(CategoryColumn::Name.eq(params.category.as_str()))
            .one(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业分类失败: {e}")))?
            .ok_or_else(|| LMSError::not_found(format!("作业分类不存在: {}", params.category)))?;

        let duplicate = Assignments::find()
            .filter(AssignmentColumn::CategoryId.eq(category.id))
            .filter(AssignmentColumn::Name.eq(params.asgname.as_str()))
            .count(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业失败: {e}")))?
            > 0;
        if duplicate {
            return Err(LMSError::conflict(format!("作业已存在: {}", params.asgname)));
        }

        let model = AssignmentActiveModel {
            category_id: Set(category.id),
            name: Set(params.asgname.clone()),
            due: Set(params.asgdue.timestamp()),
            points: Set(params.asgpoints),
            contents: Set(params.asgcontents.clone()),
            submission_type: Set(true),
            ..Default::default()
        };
        model
            .insert(&txn)
            .await
            .map_err(|e| LMSError::database_operation(format!("创建作业失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LMSError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 选课课堂内的全部作业及该学生的得分
    ///
    /// 外连接语义：未提交的作业 score 为 null。学生未选修该课堂时
    /// 返回空数组。
    pub async fn get_assignments_in_class_impl(
        &self,
        scope: &ClassScope,
        uid: &str,
    ) -> Result<Vec<StudentAssignment>> {
        let class_ids = self.resolve_class_ids(&self.db, scope).await?;
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        // 只覆盖该学生实际选修的匹配课堂
        let enrolled_class_ids: Vec<i64> = Enrolled::find()
            .filter(EnrolledColumn::Student.eq(uid))
            .filter(EnrolledColumn::ClassId.is_in(class_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询选课记录失败: {e}")))?
            .into_iter()
            .map(|e| e.class_id)
            .collect();
        if enrolled_class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let categories = AssignmentCategories::find()
            .filter(CategoryColumn::ClassId.is_in(enrolled_class_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业分类失败: {e}")))?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_names: HashMap<i64, String> =
            categories.iter().map(|c| (c.id, c.name.clone())).collect();
        let category_ids: Vec<i64> = categories.iter().map(|c| c.id).collect();

        let assignments = Assignments::find()
            .filter(AssignmentColumn::CategoryId.is_in(category_ids))
            .order_by_asc(AssignmentColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业失败: {e}")))?;

        // 该学生的提交映射 assignment_id -> score
        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
        let mut score_map: HashMap<i64, i32> = HashMap::new();
        if !assignment_ids.is_empty() {
            let submissions = Submissions::find()
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                .filter(SubmissionColumn::Student.eq(uid))
                .all(&self.db)
                .await
                .map_err(|e| LMSError::database_operation(format!("查询提交失败: {e}")))?;
            for sub in submissions {
                score_map.insert(sub.assignment_id, sub.score);
            }
        }

        Ok(assignments
            .into_iter()
            .map(|a| StudentAssignment {
                cname: category_names.get(&a.category_id).cloned().unwrap_or_default(),
                due: datetime_from_timestamp(a.due),
                score: score_map.get(&a.id).copied(),
                aname: a.name,
            })
            .collect())
    }

    /// 读取作业题目内容
    ///
    /// 单体结果不能从多个匹配里随便挑一个，定位不唯一时报错。
    pub async fn get_assignment_contents_impl(
        &self,
        scope: &AssignmentScope,
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

        let assignment = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询作业失败: {e}")))?;
        Ok(assignment.map(|a| a.contents))
    }
}
