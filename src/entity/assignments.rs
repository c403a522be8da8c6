//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    /// 截止时间，Unix 时间戳
    pub due: i64,
    pub points: i32,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    pub submission_type: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment_categories::Entity",
        from = "Column::CategoryId",
        to = "super::assignment_categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::assignment_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
