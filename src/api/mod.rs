pub mod models;
pub mod songs;

pub use models::*;
pub use songs::*;
