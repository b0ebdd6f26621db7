pub mod cookie_utils;
pub mod db_utils;
