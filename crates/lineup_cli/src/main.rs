//! Lineup CLI
//!
//! Lineup JSON → positioned players JSON, plus formation table queries.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lineup_core::{
    badges, display_name, formation_display, infer_position, lookup, supported_formations, Badge,
    CardGeometry, LineupConfig, LineupRequest, LineupResponse, TeamLineup, SCHEMA_VERSION,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Position a football lineup on its formation", long_about = None)]
struct Cli {
    /// Config JSON file (falls back to $LINEUP_CONFIG_PATH, then defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a lineup (or lineup request) JSON file
    Transform {
        /// Input JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Formation identifier overriding the lineup's code (e.g. "4-2-3-1")
        #[arg(long)]
        formation: Option<String>,

        /// Photo URL template containing {playerId}
        #[arg(long)]
        photo_template: Option<String>,

        /// Output JSON file path (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long, default_value = "false")]
        pretty: bool,

        /// Include card placements, display names and badges
        #[arg(long, default_value = "false")]
        placements: bool,
    },

    /// Look up one slot of a formation
    Lookup {
        #[arg(long)]
        formation: String,

        #[arg(long)]
        slot: String,
    },

    /// List formations with a coordinate table
    Formations,

    /// Print the JSON schema of the transform output
    Schema,
}

/// Flags that take precedence over the input document and the config.
#[derive(Debug, Default)]
struct Overrides {
    formation: Option<String>,
    photo_template: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardView {
    player_id: String,
    name: String,
    left: f32,
    top: f32,
    badges: Vec<Badge>,
}

#[derive(Debug, Serialize)]
struct TransformOutput {
    #[serde(flatten)]
    response: LineupResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    cards: Option<Vec<CardView>>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Transform { r#in, formation, photo_template, out, pretty, placements } => {
            log::info!("transforming lineup from {}", r#in.display());

            let content = fs::read_to_string(&r#in)
                .with_context(|| format!("failed to read {}", r#in.display()))?;
            let overrides = Overrides { formation, photo_template };
            let request = build_request(&content, &config, overrides)?;
            let output = render(&request, placements.then(|| config.geometry()));

            let json = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };

            match out {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    log::info!(
                        "wrote {} players ({}) to {}",
                        output.response.players.len(),
                        output.response.formation,
                        path.display()
                    );
                }
                None => println!("{json}"),
            }
        }

        Commands::Lookup { formation, slot } => {
            let coordinate = lookup(&formation, &slot);
            let label = lineup_core::formation::parse_slot(&slot)
                .map(|n| infer_position(&formation, n).short_name())
                .unwrap_or("-");
            println!("{formation} slot {slot}: {label} at x={} y={}", coordinate.x, coordinate.y);
        }

        Commands::Formations => {
            for id in supported_formations() {
                println!("{id}");
            }
        }

        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&LineupResponse::json_schema())?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LineupConfig> {
    let config = match path {
        Some(path) => LineupConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LineupConfig::from_env().context("failed to load config from environment")?,
    };
    Ok(config)
}

/// Accept either a bare `TeamLineup` or a full lineup request document.
///
/// Formation precedence: flag, request, lineup code, config default.
/// Photo template precedence: flag, request, config.
fn build_request(content: &str, config: &LineupConfig, overrides: Overrides) -> Result<LineupRequest> {
    let value: serde_json::Value = serde_json::from_str(content).context("input is not valid JSON")?;

    let mut request = if value.get("lineup").is_some() {
        let request: LineupRequest =
            serde_json::from_value(value).context("invalid lineup request")?;
        if request.schema_version != SCHEMA_VERSION {
            bail!(
                "unsupported schema version {} (expected {})",
                request.schema_version,
                SCHEMA_VERSION
            );
        }
        request
    } else {
        let lineup: TeamLineup = serde_json::from_value(value).context("invalid team lineup")?;
        LineupRequest::new(lineup)
    };
    log::debug!("lineup formation code: {}", formation_display(&request.lineup));

    if let Some(formation) = overrides.formation {
        request.formation = Some(formation);
    } else if request.formation.is_none() && !has_formation_code(&request.lineup) {
        request.formation = Some(config.default_formation.clone());
    }

    if overrides.photo_template.is_some() {
        request.photo_url_template = overrides.photo_template;
    } else if request.photo_url_template.is_none() {
        request.photo_url_template = config.photo_url_template.clone();
    }

    Ok(request)
}

fn has_formation_code(lineup: &TeamLineup) -> bool {
    lineup.formation_used.as_deref().is_some_and(|code| !code.is_empty())
}

fn render(request: &LineupRequest, geometry: Option<CardGeometry>) -> TransformOutput {
    let response = request.respond();
    if response.players.is_empty() {
        log::warn!("lineup has fewer than 11 starters, output is empty");
    }

    let cards = geometry.map(|geometry| {
        response
            .players
            .iter()
            .map(|player| {
                let placement = geometry.place(player);
                CardView {
                    player_id: player.player_id.clone(),
                    name: display_name(&player.match_name),
                    left: placement.left,
                    top: placement.top,
                    badges: badges(player),
                }
            })
            .collect()
    });

    TransformOutput { response, cards }
}
