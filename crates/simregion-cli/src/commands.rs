//! Execution of `regionctl` subcommands against a region store.

use std::io::Write;

use simregion_config::{Command, SpawnCommand, TelehubCommand};
use simregion_settings::{RegionSettings, RotationFallback, TerrainTextureSlot, Uuid};
use simregion_store::RegionStore;
use tracing::debug;

use crate::error::CliError;

/// Everything a command needs besides its arguments.
pub struct Context {
    pub store: RegionStore,
    pub rotation_fallback: RotationFallback,
}

impl Context {
    /// Load a region with write-through saving attached.
    fn open(&self, region: Uuid) -> Result<RegionSettings, CliError> {
        let mut settings = self.store.open(region)?;
        settings.rotation_fallback = self.rotation_fallback;
        Ok(settings)
    }
}

pub fn execute(ctx: &Context, command: &Command, out: &mut impl Write) -> Result<(), CliError> {
    debug!(?command, "executing");
    match command {
        Command::List => {
            for region in ctx.store.list()? {
                writeln!(out, "{region}")?;
            }
        }
        Command::Show { region } => {
            let settings = ctx.open(*region)?;
            write!(out, "{}", render_settings(&settings))?;
        }
        Command::SetTexture {
            region,
            slot,
            texture,
        } => {
            let slot =
                TerrainTextureSlot::from_number(*slot).ok_or(CliError::InvalidTextureSlot(*slot))?;
            let mut settings = ctx.open(*region)?;
            settings.set_terrain_texture(slot, *texture);
            settings.save()?;
            writeln!(
                out,
                "terrain texture {}: {}",
                slot.number(),
                settings.terrain_texture(slot)
            )?;
        }
        Command::Limits {
            region,
            agent_limit,
            object_bonus,
            maturity,
            water_height,
            terrain_raise_limit,
            terrain_lower_limit,
        } => {
            let mut settings = ctx.open(*region)?;
            if let Some(v) = agent_limit {
                settings.agent_limit = *v;
            }
            if let Some(v) = object_bonus {
                settings.object_bonus = *v;
            }
            if let Some(v) = maturity {
                settings.maturity = *v;
            }
            if let Some(v) = water_height {
                settings.water_height = *v;
            }
            if let Some(v) = terrain_raise_limit {
                settings.terrain_raise_limit = *v;
            }
            if let Some(v) = terrain_lower_limit {
                settings.terrain_lower_limit = *v;
            }
            settings.save()?;
        }
        Command::Stamp {
            region,
            seconds,
            creation_id,
        } => {
            let mut settings = ctx.open(*region)?;
            settings.loaded_creation_date_time = *seconds;
            settings.loaded_creation_id = creation_id.clone();
            settings.save()?;
            writeln!(
                out,
                "created {} {}",
                settings.loaded_creation_date(),
                settings.loaded_creation_time()
            )?;
        }
        Command::Telehub { region, action } => {
            let mut settings = ctx.open(*region)?;
            match action {
                TelehubCommand::Enable => settings.set_has_telehub(true),
                TelehubCommand::Disable => settings.set_has_telehub(false),
                TelehubCommand::Set {
                    object,
                    name,
                    pos,
                    rot,
                } => {
                    if let Some(object) = object {
                        settings.set_telehub_object(*object);
                    }
                    if let Some(name) = name {
                        settings.set_telehub_name(name.as_str());
                    }
                    if let Some(pos) = pos {
                        settings.set_telehub_pos(*pos);
                    }
                    if let Some(rot) = rot {
                        settings.set_telehub_rot(*rot);
                    }
                }
            }
            settings.save()?;
        }
        Command::Spawn { region, action } => {
            let mut settings = ctx.open(*region)?;
            match action {
                SpawnCommand::Add { point } => {
                    settings.add_spawn_point(*point);
                    settings.save()?;
                    writeln!(out, "{}", settings.spawn_points().len() - 1)?;
                }
                SpawnCommand::Remove { index } => {
                    let removed = settings.remove_spawn_point(*index)?;
                    settings.save()?;
                    writeln!(out, "removed {}", format_vec3(removed.to_array()))?;
                }
                SpawnCommand::Clear => {
                    settings.clear_spawn_points();
                    settings.save()?;
                }
                SpawnCommand::List => {
                    for (i, point) in settings.spawn_points().iter().enumerate() {
                        writeln!(out, "{i}: {}", format_vec3(point.to_array()))?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn format_vec3(v: [f32; 3]) -> String {
    format!("<{}, {}, {}>", v[0], v[1], v[2])
}

/// Human-readable dump of every setting, telehub fields as currently visible.
pub fn render_settings(s: &RegionSettings) -> String {
    let rot = s.telehub_rot();
    let mut lines = vec![
        format!("region: {}", s.region_uuid),
        format!("block_terraform: {}", s.block_terraform),
        format!("block_fly: {}", s.block_fly),
        format!("allow_damage: {}", s.allow_damage),
        format!("restrict_pushing: {}", s.restrict_pushing),
        format!("allow_land_resell: {}", s.allow_land_resell),
        format!("allow_land_join_divide: {}", s.allow_land_join_divide),
        format!("block_show_in_search: {}", s.block_show_in_search),
        format!("disable_scripts: {}", s.disable_scripts),
        format!("disable_collisions: {}", s.disable_collisions),
        format!("disable_physics: {}", s.disable_physics),
        format!("use_estate_sun: {}", s.use_estate_sun),
        format!("sandbox: {}", s.sandbox),
        format!("fixed_sun: {}", s.fixed_sun),
        format!("agent_limit: {}", s.agent_limit),
        format!("object_bonus: {}", s.object_bonus),
        format!("maturity: {}", s.maturity),
    ];
    for slot in TerrainTextureSlot::ALL {
        lines.push(format!(
            "terrain_texture_{}: {}",
            slot.number(),
            s.terrain_texture(slot)
        ));
    }
    lines.extend([
        format!("elevation_nw: {} .. {}", s.elevation_1_nw, s.elevation_2_nw),
        format!("elevation_ne: {} .. {}", s.elevation_1_ne, s.elevation_2_ne),
        format!("elevation_se: {} .. {}", s.elevation_1_se, s.elevation_2_se),
        format!("elevation_sw: {} .. {}", s.elevation_1_sw, s.elevation_2_sw),
        format!("water_height: {}", s.water_height),
        format!("terrain_raise_limit: {}", s.terrain_raise_limit),
        format!("terrain_lower_limit: {}", s.terrain_lower_limit),
        format!("sun_vector: {}", format_vec3(s.sun_vector.to_array())),
        format!("sun_position: {}", s.sun_position),
        format!("terrain_image_id: {}", s.terrain_image_id),
        format!("covenant: {}", s.covenant),
        format!(
            "created: {} {}",
            s.loaded_creation_date(),
            s.loaded_creation_time()
        ),
        format!("creation_id: {}", s.loaded_creation_id),
        format!("has_telehub: {}", s.has_telehub()),
        format!("telehub_object: {}", s.telehub_object()),
        format!("telehub_name: {}", s.telehub_name()),
        format!("telehub_pos: {}", format_vec3(s.telehub_pos().to_array())),
        format!("telehub_rot: <{}, {}, {}, {}>", rot.x, rot.y, rot.z, rot.w),
        format!("spawn_points: {}", s.spawn_points().len()),
    ]);
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
