use std::fs;

use capx::{
    CaptionSegment, ClipboardError, ExtractError,
    cli::{Args, Command, Format},
    clipboard::Clipboard,
    config::Config,
    extract, parse_range, parse_timestamp, pipeline,
    source::{FileSource, SegmentSource},
};
use clap::Parser;

const PANEL: &str = "\
0:00
[Music]
0:30
welcome back everyone
1:30
today we look at
1:02:05
the very end
";

struct Capture(Vec<String>);

impl Clipboard for Capture {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0.push(text.to_string());
        Ok(())
    }
}

#[test]
fn parse_and_extract_basics() {
    assert_eq!(parse_timestamp("1:30"), Ok(90));
    assert_eq!(parse_timestamp("1:02:05"), Ok(3725));
    assert!(matches!(
        parse_timestamp("bad"),
        Err(ExtractError::InvalidTimeFormat(_))
    ));

    let segs = vec![
        CaptionSegment::new(30, "a"),
        CaptionSegment::new(60, "b"),
        CaptionSegment::new(120, "c"),
    ];
    let range = parse_range("0:30", "1:30").unwrap();
    let got = extract(&range, &segs);
    assert_eq!((got.text.as_str(), got.count), ("a b ", 2));

    for (s, e) in [("1:00", "1:00"), ("1:00:00", "0:01"), ("99999:00", "0:00")] {
        assert!(matches!(
            parse_range(s, e),
            Err(ExtractError::InvalidRange { .. })
        ));
    }
}

#[test]
fn file_source_feeds_the_extractor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel.txt");
    fs::write(&path, PANEL).unwrap();

    let mut src = FileSource::new(path.to_string_lossy(), None, &Config::default());
    assert_eq!(src.format(), Format::Panel);
    let segs = src.poll().unwrap();
    assert_eq!(segs.len(), 4);

    let got = extract(&parse_range("0:30", "1:30").unwrap(), &segs);
    assert_eq!(got.text, "welcome back everyone today we look at ");
    assert_eq!(got.count, 2);
}

#[test]
fn cli_extract_copies_and_prints() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("captions.json");
    fs::write(
        &path,
        r#"{"segments": [
            {"timestamp": "0:10", "text": "first"},
            {"timestamp": "0:20", "text": "second"},
            {"timestamp": "0:40", "text": "third"}
        ]}"#,
    )
    .unwrap();

    let args = Args::parse_from([
        "capx",
        "extract",
        path.to_str().unwrap(),
        "--start",
        "0:10",
        "--end",
        "0:20",
    ]);
    let Command::Extract(cmd) = args.command else {
        panic!("expected extract");
    };

    let mut clip = Capture(Vec::new());
    let mut out: Vec<u8> = Vec::new();
    let report = pipeline::run_extract(cmd, &Config::default(), &mut clip, &mut out).unwrap();

    assert_eq!(report.count, 2);
    assert_eq!(clip.0, vec!["first second ".to_string()]);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Extracted 2 caption segments between 0:10 and 0:20:\nfirst second\nCopied to clipboard\n"
    );
}

#[test]
fn disabled_clipboard_is_never_called() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel.txt");
    fs::write(&path, PANEL).unwrap();

    let mut cfg = Config::default();
    cfg.clipboard.enabled = false;

    let args = Args::parse_from(["capx", "extract", path.to_str().unwrap(), "--json"]);
    let Command::Extract(cmd) = args.command else {
        panic!("expected extract");
    };

    let mut clip = Capture(Vec::new());
    let mut out: Vec<u8> = Vec::new();
    let report = pipeline::run_extract(cmd, &cfg, &mut clip, &mut out).unwrap();

    assert!(clip.0.is_empty());
    assert_eq!(report.end, "1:02:05");
    assert_eq!(report.count, 4);

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["end_seconds"], 3725);
    assert_eq!(v["text"], "[Music] welcome back everyone today we look at the very end ");
}
