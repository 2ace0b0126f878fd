pub mod error;
pub use error::*;

pub mod cache;
pub mod directory;
pub mod zone;

mod wrapper;
