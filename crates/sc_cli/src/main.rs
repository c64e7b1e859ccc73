// crates/sc_cli/src/main.rs
//
// Exit codes, typed error mapping, logging setup and the run path
// (form fields or request file → engine → report → stdout or --out files).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
}

use std::io::Write as _;
use std::path::Path;
use std::process::ExitCode;

use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use args::{parse_and_validate as parse_cli, Args, Command, RenderFormat};

use sc_algo::compute;
use sc_core::{compose_for, CalculationRequest};
use sc_io::canonical_json::write_atomic;
use sc_io::loader::load_request;
use sc_io::record::{write_result, EngineMeta, ResultRecord};
use sc_io::IoError;
use sc_report::{build_report, describe_validation_error, fee_input_warning, ReportError, ReportModel};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug, Error)]
enum MainError {
    /// Rejected inputs (adapter/engine validation, malformed request file)
    #[error("{0}")]
    Validation(String),
    /// I/O errors (read/write/path/limits)
    #[error("{0}")]
    Io(String),
    /// Report build or renderer availability
    #[error("render: {0}")]
    Render(String),
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("scalc: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_logging(&args);

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("scalc: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// stderr subscriber. `SCALC_LOG` overrides the -v default; `--quiet` wins over both.
fn init_logging(args: &Args) {
    let filter = if args.quiet {
        EnvFilter::new("error")
    } else {
        let default = match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        EnvFilter::try_from_env("SCALC_LOG").unwrap_or_else(|_| EnvFilter::new(default))
    };
    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let request = resolve_request(args)?;

    if let CalculationRequest::FeeDriven { fee, .. } = request {
        if let Some(w) = fee_input_warning(fee) {
            warn!("{w}");
        }
    }

    let result = compute(&request).map_err(|e| MainError::Validation(describe_validation_error(&e)))?;
    info!(
        mode = result.mode.as_str(),
        threshold_met = result.threshold_met,
        fee_capped = result.fee_capped(),
        "calculated"
    );

    let model = build_report(&request, &result).map_err(map_report_err)?;
    let formats = args.formats();

    match &args.out {
        None => {
            let mut stdout = std::io::stdout().lock();
            for fmt in formats {
                let body = render(fmt, &model)?;
                stdout
                    .write_all(body.as_bytes())
                    .map_err(|e| MainError::Io(format!("stdout: {e}")))?;
            }
        }
        Some(out_dir) => {
            let record = ResultRecord::new(engine_meta(), request, result).map_err(map_io_err)?;
            write_result(out_dir, &record).map_err(map_io_err)?;
            for fmt in formats {
                write_report(fmt, &model, out_dir)?;
            }
            if !args.quiet {
                eprintln!("scalc: written to {}", out_dir.display());
            }
        }
    }
    Ok(())
}

/// Form fields go through the input adapter; request files through the loader.
fn resolve_request(args: &Args) -> Result<CalculationRequest, MainError> {
    match (&args.command, &args.request) {
        (Some(cmd), None) => {
            let f = cmd.fields();
            let amount = compose_for(cmd.mode(), f.major, f.sub)
                .map_err(|e| MainError::Validation(describe_validation_error(&e)))?;
            let ratio = f.ratio_percent();
            Ok(match cmd {
                Command::Fee(_) => CalculationRequest::FeeDriven { fee: amount, ratio },
                Command::Total(_) => CalculationRequest::TotalDriven { total: amount, ratio },
            })
        }
        (None, Some(path)) => load_request(path).map_err(map_io_err),
        _ => Err(MainError::Validation("exactly one of a mode subcommand or --request".into())),
    }
}

/// Compile-time engine identifiers, overridable at build time.
fn engine_meta() -> EngineMeta {
    EngineMeta {
        name: option_env!("SCALC_ENGINE_NAME").unwrap_or("scalc").to_string(),
        version: option_env!("SCALC_ENGINE_VERSION")
            .unwrap_or(env!("CARGO_PKG_VERSION"))
            .to_string(),
    }
}

fn render(fmt: RenderFormat, model: &ReportModel) -> Result<String, MainError> {
    match fmt {
        RenderFormat::Text => Ok(sc_report::render_text::render_report_text(model)),
        RenderFormat::Json => render_json(model),
        RenderFormat::Html => render_html(model),
    }
}

// Always accept the concrete model type; gate body by feature.
fn render_json(model: &ReportModel) -> Result<String, MainError> {
    #[cfg(feature = "report-json")]
    {
        Ok(sc_report::render_json::render_report_json_string(model))
    }
    #[cfg(not(feature = "report-json"))]
    {
        let _ = model;
        Err(MainError::Render("json renderer not enabled (build with feature `report-json`)".into()))
    }
}

fn render_html(model: &ReportModel) -> Result<String, MainError> {
    #[cfg(feature = "report-html")]
    {
        Ok(sc_report::render_html::render_report_html(model))
    }
    #[cfg(not(feature = "report-html"))]
    {
        let _ = model;
        Err(MainError::Render("html renderer not enabled (build with feature `report-html`)".into()))
    }
}

fn write_report(fmt: RenderFormat, model: &ReportModel, out_dir: &Path) -> Result<(), MainError> {
    let body = render(fmt, model)?;
    let path = out_dir.join(fmt.file_name());
    write_atomic(&path, body.as_bytes()).map_err(|e| MainError::Io(format!("write {}: {e}", path.display())))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

/// Map our typed errors to the exit-code table.
fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
        MainError::Render(_) => IO,
    }
}

/// Translate sc_io::IoError into MainError buckets for exit-code mapping.
fn map_io_err(e: IoError) -> MainError {
    match e {
        IoError::Request(v) => MainError::Validation(describe_validation_error(&v)),
        IoError::Json(m) => MainError::Validation(format!("request json: {m}")),
        IoError::Path(m) => MainError::Io(format!("path: {m}")),
        IoError::Limit(m) => MainError::Io(format!("limit: {m}")),
    }
}

fn map_report_err(e: ReportError) -> MainError {
    match e {
        ReportError::Inconsistent(m) => MainError::Render(format!("inconsistent: {m}")),
    }
}
