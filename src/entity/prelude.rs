//! 预导入模块，方便使用

pub use super::administrators::{
    ActiveModel as AdministratorActiveModel, Entity as Administrators, Model as AdministratorModel,
};
pub use super::assignment_categories::{
    ActiveModel as AssignmentCategoryActiveModel, Entity as AssignmentCategories,
    Model as AssignmentCategoryModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::enrolled::{
    ActiveModel as EnrolledActiveModel, Entity as Enrolled, Model as EnrolledModel,
};
pub use super::professors::{
    ActiveModel as ProfessorActiveModel, Entity as Professors, Model as ProfessorModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
