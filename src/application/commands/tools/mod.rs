// src/application/commands/tools/mod.rs
mod create;
mod service;
mod toggle;

pub use create::CreateToolCommand;
pub use service::ToolCommandService;
pub use toggle::ToggleToolCommand;
