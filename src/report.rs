use anyhow::Result;
use serde::Serialize;
use textwrap::wrap;

use crate::{
    config::DisplayCfg,
    error::ClipboardError,
    model::{Extraction, TimeRange},
};

/// What the user asked for and what came back.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub start: String,
    pub end: String,
    pub start_seconds: u64,
    pub end_seconds: u64,
    pub count: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copied: Option<bool>,
}

impl ExtractReport {
    pub fn new(start: &str, end: &str, range: &TimeRange, extraction: Extraction) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            start_seconds: range.start_seconds(),
            end_seconds: range.end_seconds(),
            count: extraction.count,
            text: extraction.text,
            copied: None,
        }
    }

    pub fn title(&self) -> String {
        if self.count == 0 {
            format!("No captions found between {} and {}", self.start, self.end)
        } else {
            let noun = if self.count == 1 { "segment" } else { "segments" };
            format!(
                "Extracted {} caption {noun} between {} and {}:",
                self.count, self.start, self.end
            )
        }
    }

    pub fn render_text(&self, display: &DisplayCfg) -> String {
        let mut out = self.title();
        out.push('\n');

        if self.count > 0 {
            if display.wrap_width == 0 {
                out.push_str(self.text.trim_end());
                out.push('\n');
            } else {
                for line in wrap(self.text.trim_end(), display.wrap_width) {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }

        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn clipboard_status(result: &Result<(), ClipboardError>) -> String {
    match result {
        Ok(()) => "Copied to clipboard".to_string(),
        Err(e) => format!("Copy failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str, count: usize) -> ExtractReport {
        let range = TimeRange::new(30, 90).unwrap();
        ExtractReport::new(
            "0:30",
            "1:30",
            &range,
            Extraction {
                text: text.to_string(),
                count,
            },
        )
    }

    #[test]
    fn empty_result_says_so() {
        let r = report("", 0);
        let out = r.render_text(&DisplayCfg::default());
        assert_eq!(out, "No captions found between 0:30 and 1:30\n");
    }

    #[test]
    fn renders_title_and_wrapped_text() {
        let r = report("one two three four ", 2);
        let out = r.render_text(&DisplayCfg { wrap_width: 9 });
        assert_eq!(
            out,
            "Extracted 2 caption segments between 0:30 and 1:30:\none two\nthree\nfour\n"
        );

        let single = report("solo ", 1).render_text(&DisplayCfg { wrap_width: 0 });
        assert_eq!(single, "Extracted 1 caption segment between 0:30 and 1:30:\nsolo\n");
    }

    #[test]
    fn json_keeps_raw_text() {
        let json = report("a b ", 2).render_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["text"], "a b ");
        assert_eq!(v["count"], 2);
        assert_eq!(v["start_seconds"], 30);
        assert_eq!(v["end"], "1:30");
    }

    #[test]
    fn clipboard_status_lines() {
        assert_eq!(clipboard_status(&Ok(())), "Copied to clipboard");
        let err = Err(ClipboardError::NoCommands);
        assert_eq!(clipboard_status(&err), "Copy failed: no clipboard command configured");
    }
}
