//! Core data types for the leafreader service.
//!
//! Everything here is request-scoped: an [`ImagePayload`] comes in, a
//! [`VisionRequest`] goes to the upstream model, a [`Completion`] comes back
//! and one of the decoders in [`decode`] turns its content into the shape an
//! endpoint returns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decode;
mod extraction;
mod image;
mod request;

pub use decode::{NO_TEXT_FOUND, decode_detection, decode_extraction, decode_plain_text};
pub use extraction::ExtractionResult;
pub use image::{DEFAULT_IMAGE_PREFIX, ImagePayload};
pub use request::{Completion, Sampling, UNKNOWN_FINISH_REASON, VisionRequest};
