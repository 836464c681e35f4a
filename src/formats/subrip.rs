use anyhow::{Result, anyhow};
use aspasia::{PlainSubtitle, SubRipSubtitle, WebVttSubtitle};

use crate::{cli::Format, model::CaptionSegment};

/// SRT or VTT, trying the other syntax when the requested one fails.
pub fn parse_subrip(raw: &str, fmt: Format) -> Result<Vec<CaptionSegment>> {
    if fmt == Format::Vtt {
        if let Some(segs) = try_vtt(raw) {
            return Ok(segs);
        }
        if let Some(segs) = try_srt(raw) {
            tracing::info!("parsed as SRT (fallback)");
            return Ok(segs);
        }
    } else {
        if let Some(segs) = try_srt(raw) {
            return Ok(segs);
        }
        if let Some(segs) = try_vtt(raw) {
            tracing::info!("parsed as VTT (fallback)");
            return Ok(segs);
        }
    }

    Err(anyhow!("failed to parse as SRT or VTT"))
}

fn try_srt(raw: &str) -> Option<Vec<CaptionSegment>> {
    let srt = raw.parse::<SubRipSubtitle>().ok()?;
    Some(plain_to_segments(&PlainSubtitle::from(&srt)))
}

fn try_vtt(raw: &str) -> Option<Vec<CaptionSegment>> {
    let vtt = raw.parse::<WebVttSubtitle>().ok()?;
    Some(plain_to_segments(&PlainSubtitle::from(&vtt)))
}

// Each cue is a segment at its start time, floored to the second.
fn plain_to_segments(plain: &PlainSubtitle) -> Vec<CaptionSegment> {
    plain
        .events()
        .iter()
        .map(|e| CaptionSegment::new(moment_to_seconds(&e.start), e.text.clone()))
        .collect()
}

fn moment_to_seconds(m: &aspasia::Moment) -> u64 {
    let h = m.hours();
    let min = m.minutes();
    let s = m.seconds();
    u64::try_from((h * 60 + min) * 60 + s).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srt_cues_become_segments_at_start_second() {
        let raw = "1\n00:00:01,900 --> 00:00:03,000\nfirst line\n\n2\n01:02:05,000 --> 01:02:07,000\nsecond\n";
        let segs = parse_subrip(raw, Format::Srt).unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].timestamp_seconds, 1);
        assert_eq!(segs[0].text.trim(), "first line");
        assert_eq!(segs[1].timestamp_seconds, 3725);
    }

    #[test]
    fn vtt_cues_become_segments() {
        let raw = "WEBVTT\n\n00:00:30.000 --> 00:00:32.000\nhello\n\n00:01:30.500 --> 00:01:33.000\nworld\n";
        let segs = parse_subrip(raw, Format::Vtt).unwrap();
        let times: Vec<u64> = segs.iter().map(|s| s.timestamp_seconds).collect();
        assert_eq!(times, vec![30, 90]);
    }
}
