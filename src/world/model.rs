use std::collections::HashMap;
use std::fmt;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Stable handle to a room inside a [`World`].
///
/// Exits store handles instead of rooms, so the room graph can contain
/// cycles without any room owning its neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Runtime world type used by the game loop. Owns every room; rooms own
/// their items.
#[derive(Debug, Default)]
pub struct World {
    pub name: String,
    pub tagline: String,
    pub help_text: String,
    rooms: Vec<Room>,
    keys: HashMap<String, RoomId>,
    start_room: RoomId,
}

impl World {
    pub fn new(name: impl Into<String>) -> Self {
        World {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a room and returns its handle. The first room added becomes the
    /// start room until [`World::set_start_room`] says otherwise.
    pub fn add_room(&mut self, key: impl Into<String>, description: impl Into<String>) -> RoomId {
        let key = key.into();
        let id = RoomId(self.rooms.len());
        self.keys.insert(key.clone(), id);
        self.rooms.push(Room::new(key, description));
        id
    }

    /// # Panics
    ///
    /// Panics if `id` was not handed out by this world.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn get_room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_id(&self, key: &str) -> Option<RoomId> {
        self.keys.get(key).copied()
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn start_room(&self) -> RoomId {
        self.start_room
    }

    pub fn set_start_room(&mut self, id: RoomId) {
        self.start_room = id;
    }
}

/// A location node. `description` reads as the tail of "You are ...".
#[derive(Debug, Clone)]
pub struct Room {
    pub key: String,
    pub description: String,
    exits: HashMap<String, RoomId>,
    items: HashMap<String, Item>,
}

impl Room {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Room {
            key: key.into(),
            description: description.into(),
            exits: HashMap::new(),
            items: HashMap::new(),
        }
    }

    /// Records an exit, returning the neighbour it replaced, if any.
    pub fn set_exit(&mut self, direction: impl Into<String>, neighbour: RoomId) -> Option<RoomId> {
        self.exits.insert(direction.into(), neighbour)
    }

    /// Case-sensitive exact lookup.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(direction).copied()
    }

    /// Exits in no particular order.
    pub fn exits(&self) -> impl Iterator<Item = (&str, RoomId)> {
        self.exits.iter().map(|(d, id)| (d.as_str(), *id))
    }

    /// Places an item, returning the item of the same name it replaced.
    pub fn put_item(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.name.clone(), item)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Items in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Every label followed by one space, including the last.
    pub fn describe_exits(&self) -> String {
        let mut text = String::new();
        for direction in self.exits.keys() {
            text.push_str(direction);
            text.push(' ');
        }
        text
    }

    pub fn describe_items(&self) -> String {
        let mut text = String::new();
        for item in self.items.values() {
            text.push_str("- ");
            text.push_str(&item.to_string());
            text.push('\n');
        }
        text
    }

    pub fn long_description(&self) -> String {
        format!(
            "You are {}\nExits: {}\nItems in this room:\n{}",
            self.description,
            self.describe_exits(),
            self.describe_items()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub weight: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, weight: f64) -> Self {
        Item {
            name: name.into(),
            description: description.into(),
            weight,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, ", self.name, self.description)?;
        // whole weights keep one decimal place: "1.0kg", not "1kg"
        if self.weight.is_finite() && self.weight.fract() == 0.0 {
            write!(f, "{:.1}kg", self.weight)
        } else {
            write!(f, "{}kg", self.weight)
        }
    }
}
