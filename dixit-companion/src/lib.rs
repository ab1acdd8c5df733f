pub mod app;
pub mod commands;
pub mod config;
pub mod localization;
pub mod render;
