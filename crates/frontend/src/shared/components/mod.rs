pub mod admin_guard;
pub mod page_header;
pub mod stat_card;
pub mod ui;

pub use admin_guard::AdminGuard;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
