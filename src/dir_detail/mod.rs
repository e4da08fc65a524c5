pub mod detail_model;
pub mod detail_service;
pub mod detail_utils;
