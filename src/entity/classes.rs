//! 课堂实体（某课程在某学期的一次开设）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 指向所开设课程的目录号
    pub offering: i64,
    pub season: String,
    pub year: i32,
    /// 上课起止时间，自当日零点起的秒数
    pub start_time: i64,
    pub end_time: i64,
    pub location: String,
    pub taught_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::Offering",
        to = "super::courses::Column::CatalogId"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::professors::Entity",
        from = "Column::TaughtBy",
        to = "super::professors::Column::Uid"
    )]
    Professor,
    #[sea_orm(has_many = "super::enrolled::Entity")]
    Enrolled,
    #[sea_orm(has_many = "super::assignment_categories::Entity")]
    AssignmentCategories,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::enrolled::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrolled.def()
    }
}

impl Related<super::assignment_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignmentCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
