pub mod member_model;
pub mod member_service;
pub mod member_utils;
