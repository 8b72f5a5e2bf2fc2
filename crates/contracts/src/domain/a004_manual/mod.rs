pub mod aggregate;

pub use aggregate::Manual;
