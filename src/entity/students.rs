//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    /// 出生日期，当日零点 (UTC) 的 Unix 时间戳
    pub date_of_birth: i64,
    /// 主修院系（学科缩写）
    pub major: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::Major",
        to = "super::departments::Column::Subject"
    )]
    Department,
    #[sea_orm(has_many = "super::enrolled::Entity")]
    Enrolled,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::enrolled::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrolled.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
