use crate::world::{RoomId, World};

/// Result of a `go` attempt. Every variant is a normal game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Moved(RoomId),
    /// `go` without a direction.
    NoDirection,
    /// The room has no exit with that label.
    NoDoor,
}

/// Looks up `direction` among the exits of `from`. Matching is exact and
/// case-sensitive; there is no abbreviation.
pub fn resolve_movement(world: &World, from: RoomId, direction: Option<&str>) -> Movement {
    let Some(direction) = direction else {
        return Movement::NoDirection;
    };

    match world.room(from).exit(direction) {
        Some(next) => Movement::Moved(next),
        None => Movement::NoDoor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> (World, RoomId, RoomId) {
        let mut world = World::new("test");
        let west = world.add_room("west", "in the west wing");
        let east = world.add_room("east", "in the east wing");
        world.room_mut(west).set_exit("east", east);
        world.room_mut(east).set_exit("west", west);
        (world, west, east)
    }

    #[test]
    fn follows_existing_exit() {
        let (world, west, east) = corridor();
        assert_eq!(resolve_movement(&world, west, Some("east")), Movement::Moved(east));
        assert_eq!(resolve_movement(&world, east, Some("west")), Movement::Moved(west));
    }

    #[test]
    fn missing_direction() {
        let (world, west, _) = corridor();
        assert_eq!(resolve_movement(&world, west, None), Movement::NoDirection);
    }

    #[test]
    fn no_abbreviations_or_case_folding() {
        let (world, west, _) = corridor();
        assert_eq!(resolve_movement(&world, west, Some("e")), Movement::NoDoor);
        assert_eq!(resolve_movement(&world, west, Some("East")), Movement::NoDoor);
        assert_eq!(resolve_movement(&world, west, Some("west")), Movement::NoDoor);
    }
}
