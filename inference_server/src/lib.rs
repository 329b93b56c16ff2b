pub mod engine;
pub mod error;
pub mod label;
pub mod misc;
pub mod render;
pub mod server;
