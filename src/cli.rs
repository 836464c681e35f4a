use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "capx")]
#[command(version)]
#[command(about = "Extract a time range of captions from a transcript and copy it to the clipboard.")]
pub struct Args {
    /// Path to config TOML (defaults to ./capx.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract captions inside an inclusive time range
    Extract(ExtractCmd),
    /// List the caption segments read from the input
    Segments(SegmentsCmd),
    /// Convert m:ss / h:mm:ss timestamps to seconds
    ParseTime(ParseTimeCmd),
    /// Print the effective default config as TOML and exit
    PrintDefaultConfig,
}

#[derive(Debug, Parser)]
pub struct ExtractCmd {
    /// Input transcript path, or '-' for stdin
    pub input: String,

    /// Start of the range, e.g. 1:30 (defaults to the configured start)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End of the range, e.g. 12:05 (defaults to the last caption's timestamp)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Force input format (otherwise inferred from extension or content)
    #[arg(long, value_enum)]
    pub from: Option<Format>,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    pub no_copy: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the extracted text to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Allow overwriting the output file
    #[arg(long)]
    pub overwrite: bool,

    /// Poll the input until captions appear
    #[arg(long)]
    pub wait: bool,
}

#[derive(Debug, Parser)]
pub struct SegmentsCmd {
    /// Input transcript path, or '-' for stdin
    pub input: String,

    #[arg(long, value_enum)]
    pub from: Option<Format>,

    /// Poll the input until captions appear
    #[arg(long)]
    pub wait: bool,
}

#[derive(Debug, Parser)]
pub struct ParseTimeCmd {
    #[arg(required = true)]
    pub timestamps: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Transcript panel text: a timestamp line then a text line, or both on one line
    Panel,
    Tsv,
    Json,
    Srt,
    Vtt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_extract_flags() {
        let args = Args::parse_from([
            "capx", "--log-level", "debug", "extract", "t.txt", "-s", "1:30", "--end", "2:00",
            "--from", "tsv", "--no-copy", "--json",
        ]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        let Command::Extract(cmd) = args.command else {
            panic!("expected extract");
        };
        assert_eq!(cmd.input, "t.txt");
        assert_eq!(cmd.start.as_deref(), Some("1:30"));
        assert_eq!(cmd.end.as_deref(), Some("2:00"));
        assert_eq!(cmd.from, Some(Format::Tsv));
        assert!(cmd.no_copy && cmd.json && !cmd.wait);
    }

    #[test]
    fn parse_time_needs_an_argument() {
        assert!(Args::try_parse_from(["capx", "parse-time"]).is_err());
        let args = Args::try_parse_from(["capx", "parse-time", "1:30", "bad"]).unwrap();
        let Command::ParseTime(cmd) = args.command else {
            panic!("expected parse-time");
        };
        assert_eq!(cmd.timestamps, vec!["1:30", "bad"]);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
