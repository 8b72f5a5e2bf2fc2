pub mod aggregate;

pub use aggregate::Faq;
