use super::GameCore;

/// i32 slots per packed rect: kind, x, y, w, h
pub const RECT_STRIDE: usize = 5;

pub const RECT_KIND_OBSTACLE: i32 = 0;
pub const RECT_KIND_BODY: i32 = 1;

pub(super) fn collect_render_rects(game: &mut GameCore) -> usize {
    let params = game.level.params;
    let out = &mut game.render_rects;
    out.clear();

    let block = params.block_size;
    for cell in game.level.world.iter() {
        out.extend_from_slice(&[RECT_KIND_OBSTACLE, cell.x, cell.y, block, block]);
    }

    // Truncate toward zero, same as the host's integer rect API.
    let size = params.body_size as i32;
    out.extend_from_slice(&[
        RECT_KIND_BODY,
        game.body.x as i32,
        game.body.y as i32,
        size,
        size,
    ]);

    out.len() / RECT_STRIDE
}
