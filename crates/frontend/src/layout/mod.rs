pub mod breadcrumb;
pub mod global_context;
pub mod header;
pub mod shell;
pub mod sidebar;

pub use shell::Shell;
