// Frameworks layer: runtime bootstrap and the frame-driven battle task.

pub mod config;
pub mod runtime;
