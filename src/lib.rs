pub mod catalog;
pub mod commands;
pub mod platform;
pub mod route;
pub mod runtime;
pub mod shell;
