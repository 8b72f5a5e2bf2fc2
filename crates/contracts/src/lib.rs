pub mod domain;
pub mod seed;
pub mod shared;
pub mod system;
