pub mod datasets;
pub mod download;
pub mod health;
pub mod reports;

pub use datasets::*;
pub use download::*;
pub use health::*;
pub use reports::*;
