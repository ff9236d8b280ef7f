pub mod app;
pub mod autocomplete;
pub mod command;
pub mod render;
pub mod script;
pub mod shell;
pub mod ui;
