//! flood-risk-cli — 命令行前端：提交坐标或地形照片并显示洪水风险结果
//!
//! Usage:
//!   flood-risk-cli coords <latitude> <longitude>      Analyze a location
//!   flood-risk-cli image <path> [--mime <type>]       Analyze a terrain photo
//!   flood-risk-cli config                             Show the resolved configuration

use anyhow::{bail, Context};
use flood_risk_client::{
    AnalysisOrchestrator, AnalysisSession, ImageFile, RawInput, ServiceConfig, SessionStatus,
    SubmitOutcome,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            2
        }
    };
    std::process::exit(code);
}

async fn run(args: Vec<String>) -> anyhow::Result<i32> {
    let (globals, rest) = GlobalOptions::parse(args)?;
    let Some(command) = rest.first() else {
        print_usage();
        return Ok(2);
    };

    match command.as_str() {
        "coords" => {
            let [lat, lon] = match &rest[1..] {
                [lat, lon] => [lat.clone(), lon.clone()],
                _ => bail!("usage: flood-risk-cli coords <latitude> <longitude>"),
            };
            let orchestrator = globals.orchestrator()?;
            submit_and_render(&orchestrator, RawInput::coordinates(lat, lon)).await
        }
        "image" => {
            let (path, mime) = parse_image_args(&rest[1..])?;
            let input = match path {
                Some(path) => RawInput::image(read_image(&path, mime).await?),
                None => RawInput::Image(None),
            };
            let orchestrator = globals.orchestrator()?;
            submit_and_render(&orchestrator, input).await
        }
        "config" => {
            let config = globals.config()?;
            println!("base_url:             {}", config.base_url());
            println!(
                "coordinates endpoint: {}",
                config.url_for(config.endpoint_for(flood_risk_client::Modality::Coordinates))
            );
            println!(
                "image endpoint:       {}",
                config.url_for(config.endpoint_for(flood_risk_client::Modality::Image))
            );
            println!("proxy:                {}", config.proxy_url().unwrap_or("-"));
            match config.timeout() {
                Some(t) => println!("timeout:              {}s", t.as_secs()),
                None => println!("timeout:              transport default"),
            }
            Ok(0)
        }
        "version" | "--version" | "-V" => {
            println!("flood-risk-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(0)
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            Ok(2)
        }
    }
}

fn print_usage() {
    println!(
        r#"flood-risk-cli — flood-risk assessment from coordinates or terrain photos

USAGE:
    flood-risk-cli [--base-url <url>] [--config <file.yaml>] <COMMAND>

COMMANDS:
    coords <lat> <lon>            Analyze a location by coordinates
    image <path> [--mime <type>]  Analyze a terrain photo (max 10MB)
    config                        Show the resolved service configuration
    version                       Show version information
    help                          Show this help message

ENVIRONMENT:
    FLOOD_RISK_BASE_URL           Inference service base URL
    FLOOD_RISK_PROXY_URL          Proxy for outbound requests
    FLOOD_RISK_HTTP_TIMEOUT_SECS  Request timeout (default: none)
    RUST_LOG                      Log filter (default: warn)"#
    );
}

#[derive(Debug, Default)]
struct GlobalOptions {
    base_url: Option<String>,
    config_path: Option<PathBuf>,
}

impl GlobalOptions {
    fn parse(args: Vec<String>) -> anyhow::Result<(Self, Vec<String>)> {
        let mut opts = Self::default();
        let mut rest = Vec::new();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--base-url" => {
                    opts.base_url = Some(iter.next().context("--base-url requires a value")?);
                }
                "--config" => {
                    opts.config_path = Some(
                        iter.next()
                            .map(PathBuf::from)
                            .context("--config requires a path")?,
                    );
                }
                _ => rest.push(arg),
            }
        }
        Ok((opts, rest))
    }

    fn config(&self) -> anyhow::Result<ServiceConfig> {
        let mut builder = ServiceConfig::builder();
        if let Some(path) = &self.config_path {
            builder = builder
                .yaml_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
        }
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.clone());
        }
        Ok(builder.build()?)
    }

    fn orchestrator(&self) -> anyhow::Result<AnalysisOrchestrator> {
        Ok(AnalysisOrchestrator::builder().config(self.config()?).build()?)
    }
}

fn parse_image_args(args: &[String]) -> anyhow::Result<(Option<PathBuf>, Option<String>)> {
    let mut path = None;
    let mut mime = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--mime" {
            mime = Some(iter.next().context("--mime requires a value")?.clone());
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            bail!("unexpected argument: {arg}");
        }
    }
    Ok((path, mime))
}

async fn read_image(path: &Path, mime: Option<String>) -> anyhow::Result<ImageFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mime = mime.unwrap_or_else(|| guess_mime(path).to_string());
    let mut file = ImageFile::new(bytes, mime);
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        file = file.with_file_name(name);
    }
    Ok(file)
}

fn guess_mime(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}

async fn submit_and_render(
    orchestrator: &AnalysisOrchestrator,
    input: RawInput,
) -> anyhow::Result<i32> {
    match orchestrator.submit(input).await {
        SubmitOutcome::Settled(session) => Ok(render(&session)),
        SubmitOutcome::Rejected => bail!("another analysis is already in progress"),
    }
}

fn render(session: &AnalysisSession) -> i32 {
    match (session.status, &session.last_result, &session.last_error) {
        (SessionStatus::Succeeded, Some(result), _) => {
            let marker = if result.risk_level.is_elevated() { "!" } else { "-" };
            println!("[{marker}] Flood risk: {}", result.risk_level);
            println!();
            println!("{}", result.description);
            println!();
            println!("Elevation:           {:.1} m", result.elevation_meters);
            println!(
                "Distance from water: {:.1} m",
                result.distance_from_water_meters
            );
            if !result.recommendations.is_empty() {
                println!();
                println!("Recommendations:");
                for (i, rec) in result.recommendations.iter().enumerate() {
                    println!("  {}. {}", i + 1, rec);
                }
            }
            if let Some(narrative) = &result.ai_narrative {
                println!();
                println!("AI analysis:");
                println!("{narrative}");
            }
            0
        }
        (SessionStatus::Failed, _, Some(err)) => {
            eprintln!("{}", err.user_message());
            tracing::debug!(error = %err, "analysis failed");
            1
        }
        (status, _, _) => {
            eprintln!("Analysis ended in unexpected state: {status:?}");
            1
        }
    }
}
