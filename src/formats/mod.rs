use anyhow::Result;

use crate::{cli::Format, config::Config, model::CaptionSegment};

pub mod json;
pub mod panel;
pub mod subrip;
pub mod time;
pub mod tsv;

/// Parse a transcript dump into caption segments, in source order.
pub fn parse_segments(raw: &str, fmt: Format, cfg: &Config) -> Result<Vec<CaptionSegment>> {
    let trimmed = raw.trim_start();
    if fmt == Format::Panel && (trimmed.starts_with('{') || trimmed.starts_with('[')) {
        tracing::info!("input looks like JSON; attempting JSON parse");
        if let Ok(segs) = json::parse_json(raw) {
            return Ok(finish(segs, cfg));
        }
    }

    let segs = match fmt {
        Format::Panel => panel::parse_panel(raw),
        Format::Tsv => tsv::parse_tsv(raw)?,
        Format::Json => json::parse_json(raw)?,
        Format::Srt | Format::Vtt => subrip::parse_subrip(raw, fmt)?,
    };
    tracing::debug!(?fmt, segments = segs.len(), "parsed segments");

    Ok(finish(segs, cfg))
}

fn finish(mut segs: Vec<CaptionSegment>, cfg: &Config) -> Vec<CaptionSegment> {
    for s in &mut segs {
        s.text = if cfg.policy.normalize_whitespace {
            normalize_ws(&s.text)
        } else {
            s.text.trim().to_string()
        };
    }
    segs
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
