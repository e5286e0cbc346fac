use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::error::WorldError;
use super::model::{Item, World};
use super::validator::{unreachable_rooms, validate_world};

/// The World of Zuul map, compiled into the binary.
const DEFAULT_WORLD: &str = include_str!("../../worlds/zuul.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    start_room: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    help: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    weight: f64,

    /// Id of the room the item lies in.
    room: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Builds the embedded World of Zuul map.
pub fn default_world() -> Result<World, WorldError> {
    load_world_from_str(DEFAULT_WORLD)
}

/// Public API: build a world from a TOML definition.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    // Basic validation
    if world_file.world.name.trim().is_empty() {
        return Err(WorldError::EmptyField("name"));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::EmptyField("start_room"));
    }

    let mut world = World::new(world_file.world.name);
    world.tagline = normalize_multiline_desc(&world_file.world.tagline);
    world.help_text = normalize_multiline_desc(&world_file.world.help);

    // Rooms first, so exits can point forward as well as back.
    let mut seen: HashSet<&str> = HashSet::new();
    for room_cfg in &world_file.room {
        if !seen.insert(room_cfg.id.as_str()) {
            return Err(WorldError::DuplicateRoom(room_cfg.id.clone()));
        }
        world.add_room(room_cfg.id.clone(), normalize_multiline_desc(&room_cfg.desc));
    }

    let start = world
        .room_id(&world_file.world.start_room)
        .ok_or_else(|| WorldError::UnknownStartRoom(world_file.world.start_room.clone()))?;
    world.set_start_room(start);

    // Wire exits
    for room_cfg in &world_file.room {
        let Some(from) = world.room_id(&room_cfg.id) else {
            continue;
        };
        for exit in &room_cfg.exit {
            let to = world
                .room_id(&exit.target)
                .ok_or_else(|| WorldError::UnknownExitTarget {
                    room: room_cfg.id.clone(),
                    direction: exit.direction.clone(),
                    target: exit.target.clone(),
                })?;

            if world.room_mut(from).set_exit(exit.direction.clone(), to).is_some() {
                warn!(
                    room = %room_cfg.id,
                    direction = %exit.direction,
                    "exit defined twice, keeping the last one"
                );
            }
        }
    }

    // Place items
    for ic in world_file.item {
        let room_id = world.room_id(&ic.room).ok_or_else(|| WorldError::UnknownItemRoom {
            item: ic.name.clone(),
            room: ic.room.clone(),
        })?;

        let item = Item::new(ic.name, normalize_multiline_desc(&ic.desc), ic.weight);
        if let Some(replaced) = world.room_mut(room_id).put_item(item) {
            warn!(
                room = %ic.room,
                item = %replaced.name,
                "item placed twice in one room, keeping the last one"
            );
        }
    }

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Invalid(errors));
    }

    for id in unreachable_rooms(&world) {
        warn!(room = %world.room(id).key, "room cannot be reached from the start room");
    }

    debug!(name = %world.name, rooms = world.len(), "world loaded");
    Ok(world)
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else {
            match pending_blank_lines {
                // Wrapped line: single newline in TOML → space in output
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
            result.push_str(trimmed);
        }

        pending_blank_lines = 0;
    }

    result
}
