//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::administrators::{Column as AdministratorColumn, Entity as Administrators};
use crate::entity::professors::{Column as ProfessorColumn, Entity as Professors};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{LMSError, Result};
use crate::models::users::responses::UserProfile;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

impl SeaOrmStorage {
    /// 按 学生 -> 教授 -> 管理员 的优先级解析 uid
    ///
    /// department 对学生是主修院系、对教授是任职院系，管理员无此字段。
    pub async fn get_user_profile_impl(&self, uid: &str) -> Result<Option<UserProfile>> {
        if let Some(student) = Students::find()
            .filter(StudentColumn::Uid.eq(uid))
            .one(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询学生失败: {e}")))?
        {
            return Ok(Some(UserProfile {
                fname: student.first_name,
                lname: student.last_name,
                uid: student.uid,
                department: Some(student.major),
            }));
        }

        if let Some(professor) = Professors::find()
            .filter(ProfessorColumn::Uid.eq(uid))
            .one(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询教授失败: {e}")))?
        {
            return Ok(Some(UserProfile {
                fname: professor.first_name,
                lname: professor.last_name,
                uid: professor.uid,
                department: Some(professor.works_in),
            }));
        }

        if let Some(admin) = Administrators::find()
            .filter(AdministratorColumn::Uid.eq(uid))
            .one(&self.db)
            .await
            .map_err(|e| LMSError::database_operation(format!("查询管理员失败: {e}")))?
        {
            return Ok(Some(UserProfile {
                fname: admin.first_name,
                lname: admin.last_name,
                uid: admin.uid,
                department: None,
            }));
        }

        Ok(None)
    }
}
