pub mod catalog;
pub mod comments;
pub mod orders;
pub mod uploads;
