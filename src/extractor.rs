use crate::{
    error::ExtractError,
    formats::time::parse_timestamp,
    model::{CaptionSegment, Extraction, TimeRange},
};

/// Parse both bounds and build the range. Fails before any segment is looked at.
pub fn parse_range(start: &str, end: &str) -> Result<TimeRange, ExtractError> {
    let start_s = parse_timestamp(start)?;
    let end_s = parse_timestamp(end)?;
    TimeRange::new(start_s, end_s)
}

/// Concatenate, in input order, the text of every segment inside `range`.
/// Each included text is followed by a single space.
pub fn extract<'a, I>(range: &TimeRange, segments: I) -> Extraction
where
    I: IntoIterator<Item = &'a CaptionSegment>,
{
    let mut out = Extraction::default();

    for seg in segments {
        if range.contains(seg.timestamp_seconds) {
            out.text.push_str(&seg.text);
            out.text.push(' ');
            out.count += 1;
        }
    }

    out
}
