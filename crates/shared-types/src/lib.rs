pub mod dashboard;
pub mod error;

pub use dashboard::*;
pub use error::*;
