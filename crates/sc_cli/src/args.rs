// crates/sc_cli/src/args.rs
//
// Offline CLI argument surface: clap types, post-parse validation, path checks.
//
// Rules:
// - No networked paths (reject any scheme:// like http/https/file)
// - Exactly one of: a mode subcommand (fee | total)  XOR  --request <file>
// - Ratio: --ratio <pct> or --preset <0|10|20|30|40|50>; neither means 0
// - Output: stdout by default; --out <dir> writes result.json + report.<ext>

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use sc_core::constants::RATIO_PRESETS;
use sc_core::Mode;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "scalc",
    version,
    disable_help_subcommand = true,
    about = "Contingency-fee settlement calculator (fee ⇄ total, 3% fee, 5억 cap, 60% criterion)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Request JSON file (mutually exclusive with a mode subcommand).
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// Output directory for result.json and report files. Omit to print to stdout.
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Renderer(s) to emit (repeatable). Default: text.
    #[arg(long, value_enum, global = true)]
    pub render: Vec<RenderFormat>,

    /// Only errors on stderr.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// More log output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum Command {
    /// Reverse calculation: the fee is known.
    Fee(AmountArgs),
    /// Forward calculation: the total amount is known.
    Total(AmountArgs),
}

/// Form fields shared by both modes.
#[derive(Debug, clap::Args, Clone, PartialEq)]
pub struct AmountArgs {
    /// 억 field.
    #[arg(long)]
    pub major: u32,
    /// 천만 field (0-9).
    #[arg(long, default_value_t = 0)]
    pub sub: u32,
    /// Win ratio in percent, 0 ≤ r < 100.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "preset")]
    pub ratio: Option<f64>,
    /// Preset win ratio.
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<u8>,
}

impl AmountArgs {
    /// Effective ratio percent; an untouched form starts at 0.
    pub fn ratio_percent(&self) -> f64 {
        self.ratio.or(self.preset.map(f64::from)).unwrap_or(0.0)
    }
}

impl Command {
    pub fn mode(&self) -> Mode {
        match self {
            Command::Fee(_) => Mode::FeeDriven,
            Command::Total(_) => Mode::TotalDriven,
        }
    }

    pub fn fields(&self) -> &AmountArgs {
        match self {
            Command::Fee(a) | Command::Total(a) => a,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Text,
    Json,
    Html,
}

impl RenderFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            RenderFormat::Text => "report.txt",
            RenderFormat::Json => "report.json",
            RenderFormat::Html => "report.html",
        }
    }
}

impl Args {
    /// Requested renderers in first-seen order, defaulting to text.
    pub fn formats(&self) -> Vec<RenderFormat> {
        if self.render.is_empty() {
            return vec![RenderFormat::Text];
        }
        let mut out = Vec::with_capacity(self.render.len());
        for f in &self.render {
            if !out.contains(f) {
                out.push(*f);
            }
        }
        out
    }
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("invalid flag combination: {0}")]
    BadCombo(&'static str),
    #[error("path must be local file (no scheme): {0}")]
    NonLocalPath(String),
    #[error("file not found: {0}")]
    NotFound(String),
}

/// Preset parser: one of the six form buttons.
pub fn parse_preset(s: &str) -> Result<u8, String> {
    let v: u8 = s.trim().parse().map_err(|_| format!("preset must be one of {RATIO_PRESETS:?}"))?;
    if RATIO_PRESETS.contains(&v) {
        Ok(v)
    } else {
        Err(format!("preset must be one of {RATIO_PRESETS:?}"))
    }
}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if has_scheme(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    Ok(())
}

/// Ensure a path is local (no scheme) and exists as a regular file.
fn ensure_local_exists(p: &Path, label: &'static str) -> Result<(), CliError> {
    ensure_local_path(p)?;
    let meta = fs::metadata(p).map_err(|_| CliError::NotFound(format!("{label} {}", p.display())))?;
    if !meta.is_file() {
        return Err(CliError::NotFound(format!("{label} {}", p.display())));
    }
    Ok(())
}

/// Entry point used by main.rs. clap exits with code 2 on its own parse errors.
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

/// Post-parse checks clap cannot express.
pub fn validate(args: Args) -> Result<Args, CliError> {
    match (&args.command, &args.request) {
        (Some(_), Some(_)) => return Err(CliError::BadCombo("use either a mode subcommand or --request, not both")),
        (None, None) => return Err(CliError::BadCombo("a mode subcommand (fee | total) or --request is required")),
        _ => {}
    }
    if let Some(p) = &args.request {
        ensure_local_exists(p, "--request")?;
    }
    if let Some(out) = &args.out {
        ensure_local_path(out)?;
    }
    Ok(args)
}
