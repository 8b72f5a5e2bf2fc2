pub mod a001_request;
pub mod a004_manual;
pub mod a005_faq;
