use std::collections::HashSet;

use super::model::{RoomId, World};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
        return errors;
    }

    // start_room must be a handle of this world
    if world.get_room(world.start_room()).is_none() {
        errors.push(ValidationError::new(format!(
            "start_room handle {} is out of range",
            world.start_room().index()
        )));
    }

    for (_, room) in world.rooms() {
        for (direction, target) in room.exits() {
            if direction.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room.key
                )));
            }
            if world.get_room(target).is_none() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets unknown room handle {}",
                    room.key,
                    direction,
                    target.index()
                )));
            }
        }

        for item in room.items() {
            if item.name.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' holds an item with an empty name",
                    room.key
                )));
            }
            if !item.weight.is_finite() || item.weight < 0.0 {
                errors.push(ValidationError::new(format!(
                    "item '{}' in room '{}' has invalid weight {}",
                    item.name, room.key, item.weight
                )));
            }
        }
    }

    errors
}

/// Rooms that cannot be reached from the start room by following exits.
pub fn unreachable_rooms(world: &World) -> Vec<RoomId> {
    let mut seen: HashSet<RoomId> = HashSet::new();
    let mut stack = vec![world.start_room()];

    while let Some(id) = stack.pop() {
        let Some(room) = world.get_room(id) else {
            continue;
        };
        if !seen.insert(id) {
            continue;
        }
        stack.extend(room.exits().map(|(_, target)| target));
    }

    world
        .rooms()
        .map(|(id, _)| id)
        .filter(|id| !seen.contains(id))
        .collect()
}
