pub mod activity_log;
pub mod dish_row;
pub mod footer;
