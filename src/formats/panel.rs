//! Reader for the text of a video page's transcript panel.
//!
//! Two layouts are accepted, and may be mixed:
//!
//! ```text
//! 0:00
//! intro music
//! 0:04 so today we are looking at
//! ```

use crate::{formats::time::parse_timestamp, model::CaptionSegment};

pub fn parse_panel(input: &str) -> Vec<CaptionSegment> {
    let mut segs = Vec::new();
    let mut pending: Option<(usize, u64)> = None;

    for (line_no, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Ok(ts) = parse_timestamp(line) {
            if let Some((prev_line, _)) = pending {
                tracing::warn!(line = prev_line + 1, "timestamp without text; skipped");
            }
            pending = Some((line_no, ts));
            continue;
        }

        if let Some((_, ts)) = pending.take() {
            segs.push(CaptionSegment::new(ts, line));
            continue;
        }

        if let Some((head, rest)) = line.split_once(char::is_whitespace) {
            if let Ok(ts) = parse_timestamp(head) {
                segs.push(CaptionSegment::new(ts, rest.trim()));
                continue;
            }
        }

        tracing::warn!(line = line_no + 1, "text without timestamp; skipped");
    }

    if let Some((line_no, _)) = pending {
        tracing::warn!(line = line_no + 1, "timestamp without text; skipped");
    }

    segs
}
