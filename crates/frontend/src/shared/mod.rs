pub mod components;
pub mod date_utils;
pub mod dialog;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod toast;
