pub mod category;
pub mod config;
pub mod history;
pub mod models;
pub mod streak;
pub mod tracker;
