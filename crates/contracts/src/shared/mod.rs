pub mod filter;

pub use filter::{contains_ci, filter_list, search, Searchable};
