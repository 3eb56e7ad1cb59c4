pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod logging;
pub mod validation;

pub use config::*;
pub use dataset::*;
pub use error::*;
pub use export::*;
pub use logging::*;
pub use validation::*;
