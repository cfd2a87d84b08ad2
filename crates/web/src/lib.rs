//! HTTP layer: router, handlers, templates, and flash messages.

pub mod app;
pub mod config;
pub mod flash;
