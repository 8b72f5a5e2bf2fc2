pub mod a001_request;
pub mod a002_supply;
pub mod a003_document;
pub mod a004_manual;
pub mod a005_faq;
pub mod a006_vehicle;
pub mod a007_notification;
