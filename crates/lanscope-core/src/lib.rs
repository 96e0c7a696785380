//! # lanscope-core - Core Domain Types
//!
//! Foundation crate for lanscope. Provides the scan data model, error
//! handling, human-readable formatting, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Device`] - One discovered network endpoint (ip, mac, hostname, category)
//! - [`Category`] - Coarse device classification used for filtering and icons
//! - [`UsageStats`] - Interface byte counters reported with a scan
//! - [`ScanResult`] - The full output of one scan invocation
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Formatting (`format`)
//! - [`format_bytes()`] - Base-1024 byte units (B/KB/MB/GB), one decimal
//! - [`format_seconds()`] - Scan duration display
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lanscope_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all lanscope crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use format::{format_bytes, format_seconds};
pub use types::{Category, Device, ScanResult, UsageStats};
