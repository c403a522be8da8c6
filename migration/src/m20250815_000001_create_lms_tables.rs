use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建院系表
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Subject)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教授表
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Uid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::FirstName).string().not_null())
                    .col(ColumnDef::new(Professors::LastName).string().not_null())
                    .col(ColumnDef::new(Professors::WorksIn).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Professors::Table, Professors::WorksIn)
                            .to(Departments::Table, Departments::Subject)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Uid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Students::DateOfBirth)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::Major).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::Major)
                            .to(Departments::Table, Departments::Subject)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建管理员表
        manager
            .create_table(
                Table::create()
                    .table(Administrators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Administrators::Uid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Administrators::FirstName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Administrators::LastName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程目录表：catalog_id 由应用层分配，不自增
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::CatalogId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Department).string().not_null())
                    .col(ColumnDef::new(Courses::Number).integer().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::Department)
                            .to(Departments::Table, Departments::Subject)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // (department, number) 必须唯一
        manager
            .create_index(
                Index::create()
                    .name("idx-courses-department-number")
                    .table(Courses::Table)
                    .col(Courses::Department)
                    .col(Courses::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建课堂表（课程的一次开设）
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Offering).big_integer().not_null())
                    .col(ColumnDef::new(Classes::Season).string().not_null())
                    .col(ColumnDef::new(Classes::Year).integer().not_null())
                    .col(ColumnDef::new(Classes::StartTime).big_integer().not_null())
                    .col(ColumnDef::new(Classes::EndTime).big_integer().not_null())
                    .col(ColumnDef::new(Classes::Location).string().not_null())
                    .col(ColumnDef::new(Classes::TaughtBy).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::Offering)
                            .to(Courses::Table, Courses::CatalogId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::TaughtBy)
                            .to(Professors::Table, Professors::Uid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrolled::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrolled::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrolled::Student).string().not_null())
                    .col(ColumnDef::new(Enrolled::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Enrolled::Grade).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrolled::Table, Enrolled::Student)
                            .to(Students::Table, Students::Uid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrolled::Table, Enrolled::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生对同一课堂至多一条选课记录
        manager
            .create_index(
                Index::create()
                    .name("idx-enrolled-student-class")
                    .table(Enrolled::Table)
                    .col(Enrolled::Student)
                    .col(Enrolled::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建作业分类表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentCategories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentCategories::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentCategories::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentCategories::Weight)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignmentCategories::Table, AssignmentCategories::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 分类名在其课堂内唯一
        manager
            .create_index(
                Index::create()
                    .name("idx-assignment-categories-class-name")
                    .table(AssignmentCategories::Table)
                    .col(AssignmentCategories::ClassId)
                    .col(AssignmentCategories::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Name).string().not_null())
                    .col(ColumnDef::new(Assignments::Due).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::Points).integer().not_null())
                    .col(ColumnDef::new(Assignments::Contents).text().not_null())
                    .col(
                        ColumnDef::new(Assignments::SubmissionType)
                            .boolean()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CategoryId)
                            .to(AssignmentCategories::Table, AssignmentCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 作业名在其分类内唯一
        manager
            .create_index(
                Index::create()
                    .name("idx-assignments-category-name")
                    .table(Assignments::Table)
                    .col(Assignments::CategoryId)
                    .col(Assignments::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Student).string().not_null())
                    .col(ColumnDef::new(Submissions::Time).big_integer().not_null())
                    .col(ColumnDef::new(Submissions::Score).integer().not_null())
                    .col(
                        ColumnDef::new(Submissions::TextContents)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::Student)
                            .to(Students::Table, Students::Uid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生对同一作业至多一条提交记录
        manager
            .create_index(
                Index::create()
                    .name("idx-submissions-assignment-student")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::Student)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按依赖关系逆序删除
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrolled::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Administrators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Subject,
    Name,
}

#[derive(DeriveIden)]
enum Professors {
    #[sea_orm(iden = "professors")]
    Table,
    Uid,
    FirstName,
    LastName,
    WorksIn,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Uid,
    FirstName,
    LastName,
    DateOfBirth,
    Major,
}

#[derive(DeriveIden)]
enum Administrators {
    #[sea_orm(iden = "administrators")]
    Table,
    Uid,
    FirstName,
    LastName,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    CatalogId,
    Department,
    Number,
    Name,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Offering,
    Season,
    Year,
    StartTime,
    EndTime,
    Location,
    TaughtBy,
}

#[derive(DeriveIden)]
enum Enrolled {
    #[sea_orm(iden = "enrolled")]
    Table,
    Id,
    Student,
    ClassId,
    Grade,
}

#[derive(DeriveIden)]
enum AssignmentCategories {
    #[sea_orm(iden = "assignment_categories")]
    Table,
    Id,
    ClassId,
    Name,
    Weight,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CategoryId,
    Name,
    Due,
    Points,
    Contents,
    SubmissionType,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssignmentId,
    Student,
    Time,
    Score,
    TextContents,
}
