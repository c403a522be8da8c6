//! 课程目录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    /// 目录号由 CreateCourse 分配（最小空闲非负整数），不使用数据库自增
    #[sea_orm(primary_key, auto_increment = false)]
    pub catalog_id: i64,
    pub department: String,
    pub number: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::Department",
        to = "super::departments::Column::Subject"
    )]
    Department,
    #[sea_orm(has_many = "super::classes::Entity")]
    Classes,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
