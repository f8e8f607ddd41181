pub mod api;
pub mod apply;
pub mod engine;
pub mod errors;
pub mod install;
pub mod manifest;
pub mod plan;
pub mod preview;
pub mod prompt;
pub mod selection;
mod templates;
