use anyhow::{Context, Result, anyhow};
use csv::WriterBuilder;
use std::{fs, io::Write, path::Path};

use crate::{
    cli::{ExtractCmd, Format, ParseTimeCmd, SegmentsCmd},
    clipboard::Clipboard,
    config::Config,
    extractor::{extract, parse_range},
    formats::time::{format_timestamp, parse_timestamp},
    model::CaptionSegment,
    report::{ExtractReport, clipboard_status},
    source::{FileSource, SegmentSource, default_end, wait_for_segments},
};

pub fn run_extract(
    cmd: ExtractCmd,
    cfg: &Config,
    clipboard: &mut dyn Clipboard,
    out: &mut dyn Write,
) -> Result<ExtractReport> {
    let span = tracing::info_span!("extract", input = cmd.input.as_str());
    let _g = span.enter();

    let segments = load_segments(&cmd.input, cmd.from, cmd.wait, cfg)?;
    log_segment_summary(&segments, cfg);

    let start = cmd
        .start
        .unwrap_or_else(|| cfg.extract.default_start.clone());
    let end = cmd
        .end
        .unwrap_or_else(|| default_end(&segments, &cfg.extract.fallback_end));
    let (start, end) = (start.trim(), end.trim());

    let range = parse_range(start, end)?;
    let extraction = extract(&range, &segments);
    tracing::info!(
        start_seconds = range.start_seconds(),
        end_seconds = range.end_seconds(),
        matched = extraction.count,
        "extraction finished"
    );

    let mut report = ExtractReport::new(start, end, &range, extraction);

    if report.count > 0 {
        tracing::info!("===== range: {start} - {end} =====");
        tracing::info!("{}", report.text);
        tracing::info!("===== {} segments =====", report.count);
    }

    if let Some(path) = &cmd.output {
        if report.count > 0 {
            write_output(path, &report.text, cmd.overwrite)?;
            tracing::info!(path = %path.display(), "wrote output file");
        } else {
            tracing::warn!(path = %path.display(), "nothing extracted; output file not written");
        }
    }

    let copy_result = if report.count > 0 && !cmd.no_copy && cfg.clipboard.enabled {
        let r = clipboard.write_text(&report.text);
        if let Err(e) = &r {
            tracing::warn!(error = %e, "clipboard write failed");
        }
        report.copied = Some(r.is_ok());
        Some(r)
    } else {
        None
    };

    if cmd.json {
        writeln!(out, "{}", report.render_json()?)?;
    } else {
        write!(out, "{}", report.render_text(&cfg.display))?;
        if let Some(r) = &copy_result {
            writeln!(out, "{}", clipboard_status(r))?;
        }
    }

    Ok(report)
}

/// Lists segments as `timestamp<TAB>text`, readable back with `--from tsv`.
pub fn run_segments(cmd: SegmentsCmd, cfg: &Config, out: &mut dyn Write) -> Result<usize> {
    let span = tracing::info_span!("segments", input = cmd.input.as_str());
    let _g = span.enter();

    let segments = load_segments(&cmd.input, cmd.from, cmd.wait, cfg)?;
    log_segment_summary(&segments, cfg);

    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(vec![]);
    wtr.write_record(["timestamp", "text"])?;
    for s in &segments {
        wtr.write_record([format_timestamp(s.timestamp_seconds).as_str(), s.text.as_str()])?;
    }
    let data = wtr.into_inner().map_err(|e| anyhow!(e.to_string()))?;
    out.write_all(&data)?;

    Ok(segments.len())
}

pub fn run_parse_time(cmd: ParseTimeCmd, out: &mut dyn Write) -> Result<()> {
    for ts in &cmd.timestamps {
        let secs = parse_timestamp(ts)?;
        writeln!(out, "{}\t{secs}", ts.trim())?;
    }
    Ok(())
}

fn load_segments(
    input: &str,
    from: Option<Format>,
    wait: bool,
    cfg: &Config,
) -> Result<Vec<CaptionSegment>> {
    if wait && input == "-" {
        return Err(anyhow!("--wait needs a file path; stdin can only be read once"));
    }

    let mut source = FileSource::new(input, from, cfg).tolerate_missing(wait);
    tracing::info!(format = ?source.format(), "input format selected");

    if wait {
        wait_for_segments(
            &mut source,
            cfg.watch.poll_interval(),
            cfg.watch.max_attempts,
        )
    } else {
        source.poll()
    }
}

fn log_segment_summary(segments: &[CaptionSegment], cfg: &Config) {
    tracing::info!(
        segments = segments.len(),
        last_timestamp = segments.last().map(|s| s.timestamp_seconds),
        "caption summary"
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        let n = cfg.logging.debug_segment_samples.min(segments.len());
        for (i, s) in segments.iter().take(n).enumerate() {
            tracing::debug!(
                idx = i,
                timestamp_seconds = s.timestamp_seconds,
                chars = s.text.chars().count(),
                "segment sample"
            );
        }
    }
}

fn write_output(path: &Path, data: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(anyhow!(
            "refusing to overwrite existing file (pass --overwrite): {}",
            path.display()
        ));
    }
    fs::write(path, data).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}
