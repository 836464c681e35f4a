use serde::Serialize;

use crate::error::ExtractError;

/// One timestamped line of a video transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionSegment {
    pub timestamp_seconds: u64,
    pub text: String,
}

impl CaptionSegment {
    pub fn new(timestamp_seconds: u64, text: impl Into<String>) -> Self {
        Self {
            timestamp_seconds,
            text: text.into(),
        }
    }
}

/// Inclusive `[start, end]` window in seconds. Always `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start_seconds: u64,
    end_seconds: u64,
}

impl TimeRange {
    pub fn new(start_seconds: u64, end_seconds: u64) -> Result<Self, ExtractError> {
        if start_seconds >= end_seconds {
            return Err(ExtractError::InvalidRange {
                start: start_seconds,
                end: end_seconds,
            });
        }
        Ok(Self {
            start_seconds,
            end_seconds,
        })
    }

    pub fn start_seconds(&self) -> u64 {
        self.start_seconds
    }

    pub fn end_seconds(&self) -> u64 {
        self.end_seconds
    }

    pub fn contains(&self, seconds: u64) -> bool {
        self.start_seconds <= seconds && seconds <= self.end_seconds
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub text: String,
    pub count: usize,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
