use anyhow::{Result, anyhow};
use csv::ReaderBuilder;

use crate::{formats::time::parse_timestamp, model::CaptionSegment};

/// Tab-separated segments with a header row naming `timestamp` and `text`.
pub fn parse_tsv(input: &str) -> Result<Vec<CaptionSegment>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = rdr.headers()?.clone();
    let ts_ix = headers
        .iter()
        .position(|h| h.trim() == "timestamp")
        .ok_or_else(|| anyhow!("missing 'timestamp' column"))?;
    let text_ix = headers
        .iter()
        .position(|h| h.trim() == "text")
        .ok_or_else(|| anyhow!("missing 'text' column"))?;

    let mut segs = Vec::new();

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let ts = rec.get(ts_ix).unwrap_or("");
        let Some(text) = rec.get(text_ix) else {
            tracing::warn!(row = row + 1, "row has no text column; skipped");
            continue;
        };

        match parse_timestamp(ts) {
            Ok(secs) => segs.push(CaptionSegment::new(secs, text)),
            Err(e) => tracing::warn!(row = row + 1, error = %e, "skipped row"),
        }
    }

    Ok(segs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_columns_in_any_order() {
        let raw = "text\tspeaker\ttimestamp\nhello\tA\t0:05\nworld\tB\t1:00:00\n";
        assert_eq!(
            parse_tsv(raw).unwrap(),
            vec![
                CaptionSegment::new(5, "hello"),
                CaptionSegment::new(3600, "world"),
            ]
        );
    }

    #[test]
    fn skips_rows_with_bad_timestamps() {
        let raw = "timestamp\ttext\n0:05\tok\nsoon\tnope\n0:06\n0:07\talso ok\n";
        assert_eq!(
            parse_tsv(raw).unwrap(),
            vec![
                CaptionSegment::new(5, "ok"),
                CaptionSegment::new(7, "also ok"),
            ]
        );
    }

    #[test]
    fn requires_both_columns() {
        let err = parse_tsv("timestamp\tcaption\n0:01\thi\n").unwrap_err();
        assert!(err.to_string().contains("'text'"));
    }
}
