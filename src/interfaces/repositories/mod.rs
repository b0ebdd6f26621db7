pub mod assignment;
pub mod event;
pub mod school;
pub mod user;
