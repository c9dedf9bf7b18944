//! Paints game state into a [`Frame`]: board cells, the score strip, the
//! pause strip, and end-of-game washes.

use wurm_core::game::{Game, SCORE_PER_FOOD};
use wurm_core::geometry::Point;

use crate::framebuffer::{Frame, rgb};

/// Side length of one board cell in pixels.
pub const CELL_PX: u32 = 20;

/// Wash color for the victory banner.
pub const VICTORY_WASH: u32 = rgb(70, 200, 90);
/// Wash color for the game-over banner.
pub const DEFEAT_WASH: u32 = rgb(200, 60, 50);

const BACKGROUND: u32 = rgb(18, 18, 24);
const WALL: u32 = rgb(90, 90, 100);
const HEAD: u32 = rgb(0, 200, 220);
const BODY: u32 = rgb(60, 180, 80);
const FOOD: u32 = rgb(220, 60, 50);
const OBSTACLE: u32 = rgb(180, 70, 200);
const HUD: u32 = rgb(230, 210, 90);
const STRIPE: u32 = rgb(250, 250, 250);
const PAUSE_INNER: u32 = rgb(40, 40, 48);

/// Paint one full frame of the running game. While the help pause is
/// active the board is dimmed under the pause strip.
pub fn paint(frame: &mut Frame, game: &Game) {
    frame.clear(BACKGROUND);
    for x in 0..game.width() {
        wall_cell(frame, x, 0);
        wall_cell(frame, x, game.height() - 1);
    }
    // The corner cells already came from the row loops.
    for y in 1..game.height() - 1 {
        wall_cell(frame, 0, y);
        wall_cell(frame, game.width() - 1, y);
    }
    for &p in game.obstacles() {
        board_cell(frame, p, OBSTACLE);
    }
    board_cell(frame, game.food(), FOOD);
    for p in game.snake().segments() {
        board_cell(frame, p, BODY);
    }
    // Head last so a crash frame shows it over whatever it hit.
    board_cell(frame, game.snake().head(), HEAD);
    score_blocks(frame, game.score());
    if game.help_active() {
        frame.darken();
        pause_strip(frame);
    }
}

/// Dim the frame and paint a colored wash band across the middle.
pub fn paint_banner(frame: &mut Frame, accent: u32) {
    frame.darken();
    let w = frame.width() as i32;
    let h = frame.height() as i32;
    let band_h = (h / 5).max(24);
    let y = (h - band_h) / 2;
    frame.fill_rect(0, y, w, band_h, accent);
    frame.fill_rect(0, y + band_h / 2 - 2, w, 4, STRIPE);
}

fn wall_cell(frame: &mut Frame, x: i32, y: i32) {
    let c = CELL_PX as i32;
    frame.fill_rect(x * c, y * c, c, c, WALL);
}

fn board_cell(frame: &mut Frame, p: Point, color: u32) {
    let c = CELL_PX as i32;
    frame.fill_rect(p.x * c + 1, p.y * c + 1, c - 2, c - 2, color);
}

/// One block along the top wall per food eaten.
fn score_blocks(frame: &mut Frame, score: u32) {
    let eaten = score / SCORE_PER_FOOD;
    let fit = frame.width().saturating_sub(10) / 10;
    for i in 0..eaten.min(fit) {
        frame.fill_rect(4 + i as i32 * 10, 7, 6, 6, HUD);
    }
}

fn pause_strip(frame: &mut Frame) {
    let w = frame.width() as i32;
    let mid = frame.height() as i32 / 2;
    frame.fill_rect(0, mid - 16, w, 32, STRIPE);
    frame.fill_rect(0, mid - 12, w, 24, PAUSE_INNER);
}

#[cfg(test)]
mod tests {
    use wurm_core::config::GameConfig;

    use super::*;

    fn game_10x10() -> Game {
        Game::new(&GameConfig::default().with_size(10, 10)).unwrap()
    }

    fn frame_for(game: &Game) -> Frame {
        Frame::new(
            game.width() as u32 * CELL_PX,
            game.height() as u32 * CELL_PX,
        )
    }

    fn center(p: Point) -> (u32, u32) {
        (
            p.x as u32 * CELL_PX + CELL_PX / 2,
            p.y as u32 * CELL_PX + CELL_PX / 2,
        )
    }

    fn empty_cell(game: &Game) -> Point {
        for y in 1..game.height() - 1 {
            for x in 1..game.width() - 1 {
                let p = Point::new(x, y);
                if !game.snake().occupies(p)
                    && game.food() != p
                    && !game.obstacles().contains(&p)
                {
                    return p;
                }
            }
        }
        unreachable!("board has free cells");
    }

    #[test]
    fn cells_get_their_colors() {
        let game = game_10x10();
        let mut frame = frame_for(&game);
        paint(&mut frame, &game);

        assert_eq!(frame.pixel(0, 0), WALL);
        let (hx, hy) = center(game.snake().head());
        assert_eq!(frame.pixel(hx, hy), HEAD);
        let (bx, by) = center(Point::new(4, 5));
        assert_eq!(frame.pixel(bx, by), BODY);
        let (fx, fy) = center(game.food());
        assert_eq!(frame.pixel(fx, fy), FOOD);
        let (ex, ey) = center(empty_cell(&game));
        assert_eq!(frame.pixel(ex, ey), BACKGROUND);
    }

    #[test]
    fn obstacles_are_painted() {
        let game = Game::new(
            &GameConfig::default()
                .with_size(20, 20)
                .with_obstacles(true),
        )
        .unwrap();
        let mut frame = frame_for(&game);
        paint(&mut frame, &game);
        for &p in game.obstacles() {
            let (x, y) = center(p);
            assert_eq!(frame.pixel(x, y), OBSTACLE);
        }
    }

    #[test]
    fn score_blocks_track_food_eaten() {
        let mut frame = Frame::new(200, 200);
        score_blocks(&mut frame, 30);
        assert_eq!(frame.pixel(6, 10), HUD);
        assert_eq!(frame.pixel(16, 10), HUD);
        assert_eq!(frame.pixel(26, 10), HUD);
        assert_eq!(frame.pixel(36, 10), rgb(0, 0, 0));
    }

    #[test]
    fn a_zero_score_paints_no_blocks() {
        let game = game_10x10();
        let mut frame = frame_for(&game);
        paint(&mut frame, &game);
        // Block 0 would cover (6, 10); with nothing eaten the wall shows.
        assert_eq!(frame.pixel(6, 10), WALL);
    }

    #[test]
    fn pausing_dims_the_board_under_the_strip() {
        let mut game = game_10x10();
        game.toggle_help();
        let mut frame = frame_for(&game);
        paint(&mut frame, &game);
        let mid = frame.height() / 2;
        assert_eq!(frame.pixel(frame.width() / 2, mid), PAUSE_INNER);
        assert_eq!(frame.pixel(frame.width() / 2, mid - 14), STRIPE);
        let dimmed_wall = 0xFF00_0000 | ((WALL >> 1) & 0x007F_7F7F);
        assert_eq!(frame.pixel(0, 0), dimmed_wall);
    }

    #[test]
    fn banner_dims_the_board_and_paints_a_wash() {
        let game = game_10x10();
        let mut frame = frame_for(&game);
        paint(&mut frame, &game);
        paint_banner(&mut frame, DEFEAT_WASH);

        let dimmed_wall = 0xFF00_0000 | ((WALL >> 1) & 0x007F_7F7F);
        assert_eq!(frame.pixel(0, 0), dimmed_wall);

        let h = frame.height();
        let band_h = (h / 5).max(24);
        let wash_y = (h - band_h) / 2 + 2;
        assert_eq!(frame.pixel(frame.width() / 2, wash_y), DEFEAT_WASH);
        assert_eq!(frame.pixel(frame.width() / 2, h / 2), STRIPE);
    }
}
