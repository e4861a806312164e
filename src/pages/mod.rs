//! Page components, one per route.

pub mod add_student;
pub mod admin_dashboard;
pub mod course_management;
pub mod login;
pub mod not_found;
pub mod student_dashboard;
pub mod teacher_dashboard;
pub mod teacher_management;
