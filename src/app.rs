pub mod editor_state;
pub mod engine;
pub mod commands;
pub mod command_handler;
pub mod events;
