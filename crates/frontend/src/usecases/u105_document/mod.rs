pub mod permissions;
pub mod view;
