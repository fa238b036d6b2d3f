use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use artboard::codegen::{self, CodeTab};
use artboard::engine::EngineCore;
use artboard::frame;
use artboard::trace;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("trace decode failed: {0}")]
    Trace(#[from] trace::TraceError),
    #[error("unknown code tab `{0}` (expected single, html, css, or js)")]
    UnknownTab(String),
}

#[derive(Parser, Debug)]
#[command(name = "artboard-cli", about = "Artboard trace replay, inspection, and export CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the device frame catalog.
    Frames,
    /// Replay a trace and print the tabular shape summary.
    Table {
        #[arg(long, env = "ARTBOARD_TRACE")]
        trace: PathBuf,
    },
    /// Replay a trace and print one generated-code artifact.
    Code {
        #[arg(long, env = "ARTBOARD_TRACE")]
        trace: PathBuf,
        /// Which artifact: single, html, css, or js.
        #[arg(long, default_value = "single")]
        tab: String,
    },
    /// Replay a trace and write the combined export document.
    Export {
        #[arg(long, env = "ARTBOARD_TRACE")]
        trace: PathBuf,
        /// Output path; defaults to the fixed export filename.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(err) = run(Cli::parse()) {
        tracing::error!(error = %err, "command failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Frames => {
            for f in frame::CATALOG {
                println!("{:<18} {}", f.key, f.info());
            }
            Ok(())
        }
        Command::Table { trace } => {
            let engine = replay_file(&trace)?;
            let snapshot = engine.views();
            println!("{}", snapshot.frame_info);
            println!(
                "{:<4} {:<8} {:>5} {:>5} {:>5} {:>5}  {:<9} {:<9} {:>6} {:>6}",
                "id", "kind", "x", "y", "w", "h", "fill", "stroke", "width", "radius"
            );
            for row in &snapshot.table {
                println!(
                    "{:<4} {:<8} {:>5} {:>5} {:>5} {:>5}  {:<9} {:<9} {:>6} {:>6}",
                    row.id,
                    row.kind,
                    row.x,
                    row.y,
                    row.w,
                    row.h,
                    row.fill,
                    row.stroke,
                    row.stroke_width,
                    row.radius
                );
            }
            Ok(())
        }
        Command::Code { trace, tab } => {
            let engine = replay_file(&trace)?;
            let Some(tab) = CodeTab::parse(&tab) else {
                return Err(CliError::UnknownTab(tab));
            };
            println!(
                "{}",
                codegen::render_tab(tab, engine.doc.shapes(), engine.frames.active())
            );
            Ok(())
        }
        Command::Export { trace, out } => {
            let engine = replay_file(&trace)?;
            let (default_name, document) = engine.export_document();
            let path = out.unwrap_or_else(|| PathBuf::from(default_name));
            fs::write(&path, document)?;
            tracing::info!(path = %path.display(), shapes = engine.doc.len(), "export written");
            Ok(())
        }
    }
}

/// Read, decode, and replay a trace file into a fresh engine.
fn replay_file(path: &Path) -> Result<EngineCore, CliError> {
    let text = fs::read_to_string(path)?;
    let events = trace::parse_trace(&text)?;
    let mut engine = EngineCore::new();
    trace::replay(&mut engine, &events);
    tracing::debug!(events = events.len(), shapes = engine.doc.len(), "trace replayed");
    Ok(engine)
}
