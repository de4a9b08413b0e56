pub mod commands;
pub mod render;
pub mod session;

pub use commands::Command;
pub use session::{Reply, Session};
