pub mod card_utils;
