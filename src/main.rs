//! automix: continuous music mix sequencing.
//!
//! This binary can run in two modes:
//! - CLI mode: build one mix, print it and export it
//! - Daemon mode: JSON-RPC server over stdio

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use automix::cli::Cli;
use automix::config::AppConfig;
use automix::engine::MixSession;
use automix::logging;
use automix::rpc::{run_server, ServerState};
use automix::sources::SourceRouter;
use automix::types::{Mix, OutputFormat};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose).map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    let app = cli.apply_to(AppConfig::from_env());
    if let Some(reason) = app.validate() {
        return Err(anyhow!("invalid configuration: {}", reason));
    }

    if cli.is_daemon_mode() {
        run_daemon_mode(app)
    } else {
        run_cli_mode(&cli, app)
    }
}

/// Builds one mix, prints it and exports it.
fn run_cli_mode(cli: &Cli, app: AppConfig) -> Result<()> {
    let config = cli.mix_config()?;
    debug!(config = ?config, "resolved mix configuration");

    let router = SourceRouter::load(app.catalog_path.as_deref())
        .context("loading track library")?;
    let mut session = MixSession::new(router, app.effective_output_dir());
    let mix = session.create_mix(&config, app.seed)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&mix)?);
    } else {
        print!("{}", render_summary(&mix, cli.verbose));
    }

    // The summary already lists the tracks; a tracklist file is only written on request.
    if config.output_format != OutputFormat::Tracklist || cli.filename.is_some() {
        let outcome = session.export(config.output_format, cli.filename.as_deref())?;
        eprintln!("Mix exported: {}", outcome);
    }

    Ok(())
}

/// Runs the daemon mode (JSON-RPC server).
fn run_daemon_mode(app: AppConfig) -> Result<()> {
    eprintln!("=== automix JSON-RPC Server ===");
    eprintln!("Reading from stdin, writing to stdout.");
    eprintln!("Export directory: {}", app.effective_output_dir().display());
    match app.catalog_path {
        Some(ref path) => eprintln!("Track library: {}", path.display()),
        None => eprintln!("Track library: none (only ai_generated sources yield tracks)"),
    }
    eprintln!();

    let state = ServerState::new(app).context("starting server")?;
    run_server(state)?;
    Ok(())
}

/// Formats the human-readable mix summary.
fn render_summary(mix: &Mix, verbose: bool) -> String {
    let config = &mix.config;
    let mut lines = vec![
        "Auto Music Mix Generated".to_string(),
        format!("Duration: {} minutes", config.duration_minutes),
        format!("Mood: {}", config.mood),
        format!("Source: {} - {}", config.source_kind, config.source_value),
        format!("Mixing Style: {}", config.mixing_style),
        format!("Energy Flow: {}", config.energy_flow),
        format!("BPM Range: {}", config.tempo_range),
    ];
    if !config.avoid.is_empty() {
        lines.push(format!("Avoid: {}", config.avoid.join(", ")));
    }
    if !config.include.is_empty() {
        lines.push(format!("Include: {}", config.include.join(", ")));
    }

    lines.push(String::new());
    lines.push(format!("Tracklist ({} tracks):", mix.timestamps.len()));
    lines.push("-".repeat(60));
    lines.extend(mix.timestamps.iter().map(|entry| {
        format!(
            "{:2}. {} - {} ({} BPM)",
            entry.position, entry.timestamp, entry.title, entry.bpm
        )
    }));

    if verbose {
        lines.push(String::new());
        lines.push("Technical Details:".to_string());
        lines.push(format!("   Total Duration: {} seconds", mix.total_duration_sec));
        lines.push(format!("   Created: {}", mix.created_at.to_rfc3339()));
        lines.push(format!("   Seed: {}", mix.seed));
        lines.push(format!("   Output Format: {}", config.output_format));
        if let Some(ref platform) = config.output_platform {
            lines.push(format!("   Output Platform: {}", platform));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use automix::engine::mix_tracks;
    use automix::types::{MixConfig, Track};

    fn sample_mix() -> Mix {
        let config = MixConfig {
            avoid: vec!["slow".to_string()],
            output_platform: Some("local".to_string()),
            ..MixConfig::default()
        };
        let tracks = vec![
            Track::new("a", "Opener", 200, 126),
            Track::new("b", "Closer", 180, 128),
        ];
        mix_tracks(&tracks, &config, 3)
    }

    #[test]
    fn summary_lists_tracks() {
        let text = render_summary(&sample_mix(), false);
        assert!(text.contains("BPM Range: 120-130"));
        assert!(text.contains("Avoid: slow"));
        assert!(!text.contains("Include:"));
        assert!(text.contains("Tracklist (2 tracks):"));
        assert!(text.contains(" 1. 00:00 - Opener (126 BPM)"));
        assert!(!text.contains("Technical Details"));
    }

    #[test]
    fn summary_layout() {
        let text = render_summary(&sample_mix(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Auto Music Mix Generated");
        assert_eq!(lines.len(), 8 + 3 + 2);
        assert_eq!(lines[8], "");
        assert_eq!(lines[10], "-".repeat(60));
        assert_eq!(lines[12], " 2. 02:48 - Closer (128 BPM)");
        assert!(text.ends_with(")\n"));
    }

    #[test]
    fn verbose_summary_adds_details() {
        let text = render_summary(&sample_mix(), true);
        assert!(text.contains("Total Duration: 1800 seconds"));
        assert!(text.contains("Seed: 3"));
        assert!(text.contains("Output Platform: local"));
    }
}
