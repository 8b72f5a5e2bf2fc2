pub mod manage;
pub mod page;
