pub mod models;
pub mod seed;
pub mod directory;
pub mod errors;

pub use models::*;
pub use directory::*;
pub use errors::*;
