use anyhow::{Result, anyhow};
use serde_json::Value;

use crate::{formats::time::parse_timestamp, model::CaptionSegment};

const TIME_KEYS: [&str; 3] = ["timestamp", "start", "time"];

/// Accepts a bare array of segments, or an object holding one under
/// `segments` or `cues`.
pub fn parse_json(input: &str) -> Result<Vec<CaptionSegment>> {
    let v: Value = serde_json::from_str(input)?;

    if let Some(segs) = v.get("segments") {
        return parse_segment_array(segs);
    }

    if let Some(cues) = v.get("cues") {
        return parse_segment_array(cues);
    }

    if v.is_array() {
        return parse_segment_array(&v);
    }

    Err(anyhow!("unrecognized JSON transcript shape"))
}

fn parse_segment_array(v: &Value) -> Result<Vec<CaptionSegment>> {
    let arr = v
        .as_array()
        .ok_or_else(|| anyhow!("segments must be an array"))?;
    let mut segs = Vec::with_capacity(arr.len());

    for (i, item) in arr.iter().enumerate() {
        let obj = item
            .as_object()
            .ok_or_else(|| anyhow!("segment {i} must be an object"))?;

        let time = TIME_KEYS
            .iter()
            .find_map(|k| obj.get(*k))
            .ok_or_else(|| anyhow!("segment {i} has no timestamp"))?;
        let text = obj
            .get("text")
            .and_then(|x| x.as_str())
            .ok_or_else(|| anyhow!("segment {i} has no text"))?;

        match decode_time_to_seconds(time) {
            Some(secs) => segs.push(CaptionSegment::new(secs, text)),
            None => tracing::warn!(index = i, time = %time, "unparseable timestamp; skipped"),
        }
    }

    Ok(segs)
}

fn decode_time_to_seconds(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.floor() as u64)),
        Value::String(s) => parse_timestamp(s).ok().or_else(|| {
            let f: f64 = s.trim().parse().ok()?;
            (f >= 0.0).then(|| f.floor() as u64)
        }),
        _ => None,
    }
}
