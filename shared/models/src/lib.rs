//! # Stockline Domain Models
//!
//! Core domain types shared across the Stockline reporting services.
//!
//! ## Key Models
//!
//! - **PartDataset / PartRow**: an uploaded spreadsheet as ordered headers plus raw text cells
//! - **BuildabilitySummary / StockStatusRow / PoSuggestionRow**: rows of the three derived reports
//! - **StockStatus**: the three-way stock classification label
//! - **SessionProfile / BusinessRole**: questionnaire answers carried as explicit per-dataset configuration
//! - **SearchResult / InsightAnswer**: the web-search insight contract
//!
//! Report rows serialize under the exact column labels of the reporting
//! contract (`Final_Product`, `Buildable_Units`, `Stock_Status`, ...), so the
//! JSON endpoints and the CSV export agree on naming without translation.

pub mod dataset;
pub mod insight;
pub mod report;
pub mod session;

pub use dataset::{columns, PartDataset, PartRow, ACTIVE_STATUS};
pub use insight::{InsightAnswer, SearchResult};
pub use report::{BuildabilitySummary, PoSuggestionRow, StockStatus, StockStatusRow};
pub use session::{BusinessRole, SessionProfile};
