use anyhow::{Context, Result, anyhow};
use std::{fs, io::Read, path::Path, thread, time::Duration};

use crate::{
    cli::Format,
    config::Config,
    formats::{self, time::format_timestamp},
    model::CaptionSegment,
};

/// Host-provided caption list. Each poll returns the segments visible right now,
/// possibly none while the host is still loading them.
pub trait SegmentSource {
    fn poll(&mut self) -> Result<Vec<CaptionSegment>>;
}

/// Reads segments from a file, or stdin when the path is `-`.
pub struct FileSource {
    input: String,
    format: Format,
    cfg: Config,
    tolerate_missing: bool,
}

impl FileSource {
    pub fn new(input: impl Into<String>, format: Option<Format>, cfg: &Config) -> Self {
        let input = input.into();
        let format = format.unwrap_or_else(|| infer_format_from_path_or_dash(&input));
        Self {
            input,
            format,
            cfg: cfg.clone(),
            tolerate_missing: false,
        }
    }

    /// Treat a missing input file as "no captions yet" instead of an error.
    pub fn tolerate_missing(mut self, yes: bool) -> Self {
        self.tolerate_missing = yes;
        self
    }

    pub fn format(&self) -> Format {
        self.format
    }

    fn is_stdin(&self) -> bool {
        self.input == "-"
    }
}

impl SegmentSource for FileSource {
    fn poll(&mut self) -> Result<Vec<CaptionSegment>> {
        if self.tolerate_missing && !self.is_stdin() && !Path::new(&self.input).exists() {
            tracing::debug!(input = self.input.as_str(), "input not present yet");
            return Ok(Vec::new());
        }

        let raw = read_input_to_string(&self.input)?;
        tracing::debug!(bytes = raw.len(), "read input");

        formats::parse_segments(&raw, self.format, &self.cfg)
            .with_context(|| format!("failed parsing input as {:?}", self.format))
    }
}

pub fn infer_format_from_path_or_dash(input: &str) -> Format {
    if input == "-" {
        return Format::Panel;
    }
    let p = Path::new(input);
    match p
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
        .as_str()
    {
        "tsv" => Format::Tsv,
        "json" => Format::Json,
        "srt" => Format::Srt,
        "vtt" => Format::Vtt,
        _ => Format::Panel,
    }
}

fn read_input_to_string(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed reading input: {input}"))
    }
}

/// Poll `source` until it yields at least one segment.
/// `max_attempts == 0` keeps polling indefinitely.
pub fn wait_for_segments<S: SegmentSource + ?Sized>(
    source: &mut S,
    interval: Duration,
    max_attempts: u32,
) -> Result<Vec<CaptionSegment>> {
    let mut attempt: u32 = 0;
    loop {
        attempt = attempt.saturating_add(1);
        let segs = source.poll()?;
        if !segs.is_empty() {
            tracing::info!(attempt, segments = segs.len(), "captions available");
            return Ok(segs);
        }

        if max_attempts != 0 && attempt >= max_attempts {
            return Err(anyhow!("no captions appeared after {attempt} attempts"));
        }

        tracing::debug!(attempt, "no captions yet; waiting");
        thread::sleep(interval);
    }
}

/// Display timestamp of the last segment, or `fallback` when there are none.
pub fn default_end(segments: &[CaptionSegment], fallback: &str) -> String {
    match segments.last() {
        Some(last) => format_timestamp(last.timestamp_seconds),
        None => {
            tracing::info!(fallback, "no segments; using fallback end time");
            fallback.to_string()
        }
    }
}
