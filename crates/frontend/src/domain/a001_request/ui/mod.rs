pub mod approvals;
pub mod list;
