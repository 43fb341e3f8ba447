use anyhow::Result;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wg_show::cli::Cli;
use wg_show::config::Settings;
use wg_show::output::{Renderer, StyleTable, TableSpec};
use wg_show::{pipeline, wg};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse_forwarding(std::env::args_os());

    if cli.version {
        println!("wg-show version {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    init_tracing();

    let settings = Settings::load(cli.settings.as_deref()).await?;
    let status = wg::show(&settings.status_command, &cli.wg_args).await?;

    if !status.success() {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(status.stdout.as_bytes())?;
        stderr.write_all(status.stderr.as_bytes())?;
        return Ok(exit_code(status.code));
    }

    if !status.stderr.is_empty() {
        eprint!("{}", status.stderr);
    }

    let rendered = enrich(&cli, &settings, &status.stdout).await?;
    let text = rendered.as_deref().unwrap_or(&status.stdout);
    std::io::stdout().lock().write_all(text.as_bytes())?;

    Ok(ExitCode::SUCCESS)
}

/// Annotated rendering of the status output, or `None` to show it untouched.
async fn enrich(cli: &Cli, settings: &Settings, output: &str) -> Result<Option<String>> {
    let Some(interface) = pipeline::enrichment_target(&cli.wg_args, output) else {
        debug!(args = ?cli.wg_args, "no single interface targeted, showing raw status");
        return Ok(None);
    };

    let annotations = match pipeline::load_annotations(&settings.config_dir, &interface).await {
        Ok(annotations) => annotations,
        Err(e) => {
            debug!(error = %format!("{:#}", e), "config unavailable, showing raw status");
            return Ok(None);
        }
    };

    let snapshot = pipeline::build_snapshot(output, &annotations, &cli.selection());
    let renderer = Renderer {
        mode: cli.render_mode(),
        table: TableSpec::new(&settings.table),
        styles: StyleTable::for_mode(cli.color.unwrap_or(settings.color)),
    };

    renderer.render(output, &snapshot).map(Some)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WG_SHOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(code: Option<i32>) -> ExitCode {
    code.and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
