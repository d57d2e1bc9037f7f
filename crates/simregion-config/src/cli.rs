//! Command-line argument parsing for `regionctl`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use simregion_settings::{Quat, RotationFallback, Uuid, Vec3};

use crate::ToolConfig;

/// Inspect and edit stored region settings.
///
/// Global options override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "regionctl", about = "Inspect and edit stored region settings")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding region settings files.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Report the legacy degenerate rotation for regions without a telehub.
    #[arg(long, global = true)]
    pub legacy_rotation: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List stored regions.
    List,
    /// Print every setting of a region.
    Show { region: Uuid },
    /// Set a terrain texture. The nil id restores the slot default.
    SetTexture {
        region: Uuid,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
        slot: u8,
        texture: Uuid,
    },
    /// Change capacity and terrain limits.
    Limits {
        region: Uuid,
        #[arg(long, allow_hyphen_values = true)]
        agent_limit: Option<i32>,
        #[arg(long)]
        object_bonus: Option<f64>,
        #[arg(long)]
        maturity: Option<i32>,
        #[arg(long)]
        water_height: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        terrain_raise_limit: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        terrain_lower_limit: Option<f64>,
    },
    /// Record where the region's content came from.
    Stamp {
        region: Uuid,
        /// POSIX seconds.
        #[arg(allow_hyphen_values = true)]
        seconds: i32,
        creation_id: String,
    },
    /// Manage the region telehub.
    Telehub {
        region: Uuid,
        #[command(subcommand)]
        action: TelehubCommand,
    },
    /// Manage telehub spawn points.
    Spawn {
        region: Uuid,
        #[command(subcommand)]
        action: SpawnCommand,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum TelehubCommand {
    Enable,
    Disable,
    /// Update telehub fields. Stored even while the telehub is disabled.
    Set {
        #[arg(long)]
        object: Option<Uuid>,
        #[arg(long)]
        name: Option<String>,
        /// Position as `x,y,z`.
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        pos: Option<Vec3>,
        /// Rotation as `x,y,z,w`.
        #[arg(long, value_parser = parse_quat, allow_hyphen_values = true)]
        rot: Option<Quat>,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SpawnCommand {
    /// Append an offset `x,y,z` relative to the telehub.
    Add {
        #[arg(value_parser = parse_vec3, allow_hyphen_values = true)]
        point: Vec3,
    },
    /// Remove the spawn point at `index`.
    Remove { index: usize },
    Clear,
    List,
}

fn parse_components<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {}", parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number {part:?}: {e}"))?;
    }
    Ok(out)
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    parse_components::<3>(s).map(Vec3::from_array)
}

fn parse_quat(s: &str) -> Result<Quat, String> {
    parse_components::<4>(s).map(Quat::from_array)
}

impl ToolConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref dir) = args.data_dir {
            self.storage.data_dir = Some(dir.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.legacy_rotation {
            self.telehub.rotation_fallback = RotationFallback::Legacy;
        }
    }
}
