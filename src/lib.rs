//! Pull an inclusive time range of captions out of a video transcript.
//!
//! The core is [`extractor::extract`]: a linear, order-preserving filter over
//! [`model::CaptionSegment`]s. Everything around it reads transcripts, waits for
//! them to appear, and hands the result to the clipboard.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod extractor;
pub mod formats;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod source;

pub use error::{ClipboardError, ExtractError};
pub use extractor::{extract, parse_range};
pub use formats::time::{format_timestamp, parse_timestamp};
pub use model::{CaptionSegment, Extraction, TimeRange};
