pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod date_utils;
pub mod icons;
pub mod lifecycle;
pub mod money_utils;
pub mod navigation;
pub mod notification;
pub mod page_frame;
pub mod page_standard;
