//! Transport layer: CLI runners and the HTTP preview shell

pub mod cli;
pub mod http;
