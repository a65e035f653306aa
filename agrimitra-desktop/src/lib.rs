pub mod app;
pub mod commands;
pub mod console;
pub mod logging;
