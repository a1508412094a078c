pub mod app;
pub mod config;
pub mod models;
pub mod size;
pub mod util;
