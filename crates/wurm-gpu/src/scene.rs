//! Builds the per-frame rectangle instances. All geometry is in window
//! pixels; the shader converts to clip space.

use wurm_core::game::{Game, SCORE_PER_FOOD};
use wurm_core::geometry::Point;

/// Side length of one board cell in pixels.
pub const CELL_PX: u32 = 20;

/// Background clear color, linear RGB.
pub const CLEAR_COLOR: [f64; 3] = [0.07, 0.07, 0.095];

/// Wash color for the victory banner.
pub const VICTORY_WASH: [f32; 4] = [0.27, 0.78, 0.35, 0.9];
/// Wash color for the game-over banner.
pub const DEFEAT_WASH: [f32; 4] = [0.78, 0.24, 0.20, 0.9];

const WALL: [f32; 4] = [0.35, 0.35, 0.39, 1.0];
const HEAD: [f32; 4] = [0.0, 0.78, 0.86, 1.0];
const BODY: [f32; 4] = [0.24, 0.71, 0.31, 1.0];
const FOOD: [f32; 4] = [0.86, 0.24, 0.20, 1.0];
const OBSTACLE: [f32; 4] = [0.71, 0.27, 0.78, 1.0];
const HUD: [f32; 4] = [0.90, 0.82, 0.35, 1.0];
const STRIPE: [f32; 4] = [0.98, 0.98, 0.98, 1.0];
const PAUSE_INNER: [f32; 4] = [0.16, 0.16, 0.19, 1.0];
const DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.55];

/// One screen-space rectangle, expanded to a quad in the vertex shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RectInstance {
    /// Top-left corner in pixels.
    pub pos: [f32; 2],
    /// Extent in pixels.
    pub size: [f32; 2],
    /// RGBA fill color.
    pub color: [f32; 4],
}

fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> RectInstance {
    RectInstance {
        pos: [x, y],
        size: [w, h],
        color,
    }
}

/// Build the full instance list for one frame of the running game.
pub fn build(game: &Game) -> Vec<RectInstance> {
    let mut rects = Vec::with_capacity((game.width() * game.height()) as usize / 2);
    for x in 0..game.width() {
        rects.push(wall_cell(x, 0));
        rects.push(wall_cell(x, game.height() - 1));
    }
    // The corner cells already came from the row loops.
    for y in 1..game.height() - 1 {
        rects.push(wall_cell(0, y));
        rects.push(wall_cell(game.width() - 1, y));
    }
    for &p in game.obstacles() {
        rects.push(board_cell(p, OBSTACLE));
    }
    rects.push(board_cell(game.food(), FOOD));
    for p in game.snake().segments() {
        rects.push(board_cell(p, BODY));
    }
    // Head last so a crash frame shows it over whatever it hit.
    rects.push(board_cell(game.snake().head(), HEAD));
    score_blocks(&mut rects, game.score(), game.width() as u32 * CELL_PX);
    if game.help_active() {
        pause_strip(&mut rects, game);
    }
    rects
}

/// Banner rectangles painted over the final frame: a dim layer, the wash
/// band, and a white stripe through its middle.
pub fn banner(width: f32, height: f32, accent: [f32; 4]) -> Vec<RectInstance> {
    let band_h = (height / 5.0).max(24.0);
    let y = (height - band_h) / 2.0;
    vec![
        rect(0.0, 0.0, width, height, DIM),
        rect(0.0, y, width, band_h, accent),
        rect(0.0, y + band_h / 2.0 - 2.0, width, 4.0, STRIPE),
    ]
}

fn wall_cell(x: i32, y: i32) -> RectInstance {
    let c = CELL_PX as f32;
    rect(x as f32 * c, y as f32 * c, c, c, WALL)
}

fn board_cell(p: Point, color: [f32; 4]) -> RectInstance {
    let c = CELL_PX as f32;
    rect(
        p.x as f32 * c + 1.0,
        p.y as f32 * c + 1.0,
        c - 2.0,
        c - 2.0,
        color,
    )
}

/// One block along the top wall per food eaten.
fn score_blocks(rects: &mut Vec<RectInstance>, score: u32, width_px: u32) {
    let eaten = score / SCORE_PER_FOOD;
    let fit = width_px.saturating_sub(10) / 10;
    for i in 0..eaten.min(fit) {
        rects.push(rect(4.0 + i as f32 * 10.0, 7.0, 6.0, 6.0, HUD));
    }
}

fn pause_strip(rects: &mut Vec<RectInstance>, game: &Game) {
    let w = game.width() as f32 * CELL_PX as f32;
    let h = game.height() as f32 * CELL_PX as f32;
    let mid = h / 2.0;
    rects.push(rect(0.0, 0.0, w, h, DIM));
    rects.push(rect(0.0, mid - 16.0, w, 32.0, STRIPE));
    rects.push(rect(0.0, mid - 12.0, w, 24.0, PAUSE_INNER));
}
