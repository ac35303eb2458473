pub mod interview;
pub mod interview_type;
pub mod notification;
