pub mod dir_card;
pub mod dir_config;
pub mod dir_detail;
pub mod dir_markup;
pub mod dir_member;
pub mod dir_view;
