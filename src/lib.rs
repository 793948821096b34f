pub mod cli;
pub mod clipboard;
pub mod config;
pub mod links;
pub mod logging;
pub mod photo;
pub mod profile;
pub mod ui;
