pub mod config;
pub mod listing;
pub mod page;
pub mod session;
pub mod utils;
pub mod webdriver;
