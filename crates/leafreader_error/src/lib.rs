//! Error types for the leafreader service.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Malformed model output is never an error: the decoders in
//! `leafreader_core` degrade instead of failing.
//!
//! # Examples
//!
//! ```
//! use leafreader_error::{LeafreaderResult, RequestError, RequestErrorKind};
//!
//! fn check(image: &str) -> LeafreaderResult<()> {
//!     if image.is_empty() {
//!         Err(RequestError::new(RequestErrorKind::MissingImage))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gateway;
mod request;

pub use config::ConfigError;
pub use error::{LeafreaderError, LeafreaderErrorKind, LeafreaderResult};
pub use gateway::{DETAIL_LIMIT, GatewayError, GatewayErrorKind, GatewayResult};
pub use request::{RequestError, RequestErrorKind};
