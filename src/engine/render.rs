use crate::engine::output::Output;
use crate::world;

pub fn render_room(out: &mut Output, room: &world::Room) {
    out.room(room.long_description());
}
