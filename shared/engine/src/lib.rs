//! # Stockline Report Engine
//!
//! The report-derivation core: three pure operations over an in-memory
//! [`PartDataset`](stockline_models::PartDataset).
//!
//! - [`compute_buildability`]: clear-to-build units per final product,
//!   bounded by the most constraining `Active` component
//! - [`classify_stock`]: three-way stock status for every part
//! - [`suggest_purchase_orders`]: order quantities to reach a
//!   days-of-inventory target
//!
//! Each operation checks for exactly the columns it consumes, parses only
//! the cells it reads, and returns either a complete result or a single
//! [`ReportError`]. No I/O, no logging, no shared state; the same dataset
//! and parameters always produce the same output, and concurrent callers
//! need no coordination.

pub mod buildability;
mod cells;
pub mod error;
pub mod purchase;
pub mod stock;

pub use buildability::{compute_buildability, BUILDABILITY_COLUMNS};
pub use error::{ReportError, ReportResult};
pub use purchase::{suggest_purchase_orders, PoPolicy, DEFAULT_TARGET_DAYS, PO_SUGGESTION_COLUMNS};
pub use stock::{classify_on_hand, classify_stock, OVERSTOCK_THRESHOLD, STOCK_STATUS_COLUMNS};
