pub mod markup_utils;
