//! Game state and the one-tick simulation rules.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::command::Command;
use crate::config::GameConfig;
use crate::error::WurmResult;
use crate::geometry::{Direction, Point};
use crate::snake::{INITIAL_LENGTH, Snake};

/// Score awarded for each food eaten.
pub const SCORE_PER_FOOD: u32 = 10;
/// Default score threshold for winning.
pub const WIN_SCORE: u32 = 200;

/// Random placement draws before falling back to an exhaustive scan.
const MAX_PLACEMENT_ATTEMPTS: u32 = 128;

/// The full state of one game: board, snake, food, obstacles, and score.
///
/// [`Game::update`] advances the simulation by exactly one tick. All
/// collision and scoring rules live here; frontends only read this state.
/// The board bounds include a 1-cell wall border, so the playable interior
/// is `1..=width-2` by `1..=height-2`.
pub struct Game {
    snake: Snake,
    food: Point,
    obstacles: Vec<Point>,
    score: u32,
    finished: bool,
    help_active: bool,
    width: i32,
    height: i32,
    win_score: u32,
    rng: StdRng,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("size", &(self.width, self.height))
            .field("score", &self.score)
            .field("snake_len", &self.snake.len())
            .field("obstacles", &self.obstacles.len())
            .field("finished", &self.finished)
            .finish()
    }
}

impl Game {
    /// Build a game from `config`.
    ///
    /// Placement order: the snake spawns at the board center heading right,
    /// then the food, then the obstacles; each placement avoids everything
    /// placed before it.
    pub fn new(config: &GameConfig) -> WurmResult<Self> {
        config.validate()?;
        let mut game = Self {
            snake: Self::starting_snake(config.width, config.height),
            food: Point::new(0, 0),
            obstacles: Vec::new(),
            score: 0,
            finished: false,
            help_active: false,
            width: config.width,
            height: config.height,
            win_score: config.win_score,
            rng: StdRng::seed_from_u64(config.seed),
        };
        game.place_food();
        if config.obstacles {
            game.place_obstacles();
        }
        Ok(game)
    }

    /// Advance the simulation by one tick. No effect once finished.
    ///
    /// Order is fixed: move, wall check, self check, food, obstacle check,
    /// win check. The first terminal check that fires ends the tick.
    pub fn update(&mut self) {
        if self.finished {
            return;
        }
        self.snake.advance();
        if self.hits_wall(self.snake.head()) {
            self.finished = true;
            return;
        }
        if self.snake.self_collision() {
            self.finished = true;
            return;
        }
        if self.snake.head() == self.food {
            self.snake.grow();
            self.score += SCORE_PER_FOOD;
            self.place_food();
        }
        if self.obstacles.contains(&self.snake.head()) {
            self.finished = true;
            return;
        }
        if self.score >= self.win_score {
            self.finished = true;
        }
    }

    /// Steer the snake from a movement command. Every other command is
    /// ignored here; the session loop filters them out before this call.
    pub fn set_direction(&mut self, cmd: Command) {
        if let Some(dir) = cmd.direction() {
            self.snake.set_direction(dir);
        }
    }

    /// Toggle the help pause flag. The flag is advisory: the session loop
    /// checks it and skips [`Game::update`] while it is set.
    pub fn toggle_help(&mut self) {
        self.help_active = !self.help_active;
    }

    /// Restore the starting snake, clear the score and flags, and
    /// regenerate the food. Obstacles are kept; rebuild the game for a
    /// fresh layout.
    pub fn reset(&mut self) {
        self.snake = Self::starting_snake(self.width, self.height);
        self.score = 0;
        self.finished = false;
        self.help_active = false;
        self.place_food();
    }

    /// Board width in cells, wall border included.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells, wall border included.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once the game has ended by wall, self, or obstacle collision,
    /// or by reaching the victory threshold.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True when the score has reached the victory threshold.
    pub fn is_won(&self) -> bool {
        self.score >= self.win_score
    }

    /// True while the help overlay pause is active.
    pub fn help_active(&self) -> bool {
        self.help_active
    }

    /// The snake.
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current food cell.
    pub fn food(&self) -> Point {
        self.food
    }

    /// Obstacle cells, fixed at construction.
    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    fn starting_snake(width: i32, height: i32) -> Snake {
        Snake::new(
            Point::new(width / 2, height / 2),
            Direction::Right,
            INITIAL_LENGTH,
        )
    }

    fn hits_wall(&self, p: Point) -> bool {
        p.x <= 0 || p.y <= 0 || p.x >= self.width - 1 || p.y >= self.height - 1
    }

    fn place_food(&mut self) {
        if let Some(p) = self.free_interior_cell() {
            self.food = p;
        }
    }

    fn place_obstacles(&mut self) {
        let count = (self.width * self.height / 100) as usize;
        self.obstacles.reserve(count);
        for _ in 0..count {
            if let Some(p) = self.free_interior_cell() {
                self.obstacles.push(p);
            }
        }
    }

    /// Draw a free interior cell: bounded random sampling first, then an
    /// exhaustive scan so placement terminates even on a crowded board.
    /// `None` only when no interior cell is free at all.
    fn free_interior_cell(&mut self) -> Option<Point> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let p = self.random_interior();
            if self.cell_free(p) {
                return Some(p);
            }
        }
        let free: Vec<Point> = self
            .interior_cells()
            .filter(|&p| self.cell_free(p))
            .collect();
        if free.is_empty() {
            None
        } else {
            Some(free[self.rng.random_range(0..free.len())])
        }
    }

    fn random_interior(&mut self) -> Point {
        Point::new(
            self.rng.random_range(1..self.width - 1),
            self.rng.random_range(1..self.height - 1),
        )
    }

    fn cell_free(&self, p: Point) -> bool {
        !self.snake.occupies(p) && !self.obstacles.contains(&p) && p != self.food
    }

    fn interior_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let (w, h) = (self.width, self.height);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn game(width: i32, height: i32) -> Game {
        Game::new(&GameConfig::default().with_size(width, height)).unwrap()
    }

    fn interior(game: &Game, p: Point) -> bool {
        p.x >= 1 && p.x <= game.width() - 2 && p.y >= 1 && p.y <= game.height() - 2
    }

    #[test]
    fn snake_spawns_centered_heading_right() {
        let g = game(40, 20);
        assert_eq!(g.snake().head(), Point::new(20, 10));
        assert_eq!(g.snake().direction(), Direction::Right);
        assert_eq!(g.snake().len(), INITIAL_LENGTH);
    }

    #[test]
    fn three_ticks_right_shift_the_body_by_three() {
        let mut g = game(40, 20);
        g.food = Point::new(1, 1);
        let before: Vec<Point> = g.snake().segments().collect();
        for _ in 0..3 {
            g.update();
        }
        let after: Vec<Point> = g.snake().segments().collect();
        assert!(!g.is_finished());
        assert_eq!(after.len(), before.len());
        for (a, b) in after.iter().zip(&before) {
            assert_eq!(*a, Point::new(b.x + 3, b.y));
        }
    }

    #[test]
    fn right_wall_finishes_the_game() {
        let mut g = game(10, 10);
        g.food = Point::new(1, 1);
        // Head starts at x=5; x=8 is the last interior column.
        for _ in 0..3 {
            g.update();
            assert!(!g.is_finished());
        }
        g.update();
        assert!(g.is_finished());
        assert_eq!(g.score(), 0);
        assert_eq!(g.snake().head(), Point::new(9, 5));
    }

    #[test]
    fn left_wall_finishes_the_game() {
        let mut g = game(12, 12);
        g.food = Point::new(10, 10);
        g.set_direction(Command::MoveUp);
        g.update();
        g.set_direction(Command::MoveLeft);
        // Head is at (6, 5); five moves reach x=1, the sixth hits the wall.
        for _ in 0..5 {
            g.update();
            assert!(!g.is_finished(), "head: {:?}", g.snake().head());
        }
        g.update();
        assert!(g.is_finished());
        assert_eq!(g.snake().head(), Point::new(0, 5));
    }

    #[test]
    fn eating_grows_scores_and_moves_the_food() {
        let mut g = game(40, 20);
        let head = g.snake().head();
        let food = head.step(Direction::Right);
        g.food = food;
        let len_before = g.snake().len();
        g.update();
        assert_eq!(g.score(), SCORE_PER_FOOD);
        assert_eq!(g.snake().len(), len_before + 1);
        // Growth pushes a second head past the food cell in the same tick.
        assert_eq!(g.snake().head(), food.step(Direction::Right));
        let second: Vec<Point> = g.snake().segments().collect();
        assert_eq!(second[1], food);
        assert_ne!(g.food(), food);
        assert!(!g.snake().occupies(g.food()));
        assert!(interior(&g, g.food()));
    }

    #[test]
    fn score_is_unchanged_on_a_wall_tick() {
        let mut g = game(10, 10);
        // Food right on the last interior cell before the wall: the wall
        // check runs first on the tick after eating it.
        g.food = Point::new(8, 5);
        for _ in 0..3 {
            g.update();
        }
        assert_eq!(g.score(), SCORE_PER_FOOD);
        let score_before = g.score();
        g.update();
        assert!(g.is_finished());
        assert_eq!(g.score(), score_before);
    }

    #[test]
    fn self_collision_finishes_the_game() {
        let mut g = game(20, 20);
        g.food = g.snake().head().step(Direction::Right);
        g.update();
        assert_eq!(g.snake().len(), 5);
        g.food = Point::new(1, 1);
        g.set_direction(Command::MoveDown);
        g.update();
        g.set_direction(Command::MoveLeft);
        g.update();
        g.set_direction(Command::MoveUp);
        g.update();
        assert!(g.is_finished());
    }

    #[test]
    fn reversal_request_is_ignored() {
        let mut g = game(40, 20);
        g.food = Point::new(1, 1);
        g.set_direction(Command::MoveLeft);
        assert_eq!(g.snake().direction(), Direction::Right);
        let head = g.snake().head();
        g.update();
        assert_eq!(g.snake().head(), head.step(Direction::Right));
    }

    #[test]
    fn non_movement_commands_do_not_steer() {
        let mut g = game(40, 20);
        g.set_direction(Command::Help);
        g.set_direction(Command::Exit);
        g.set_direction(Command::Switch(crate::FrontendId::Gpu));
        assert_eq!(g.snake().direction(), Direction::Right);
    }

    #[test]
    fn obstacle_collision_finishes_the_game() {
        let mut g = game(40, 20);
        g.food = Point::new(1, 1);
        g.obstacles = vec![g.snake().head().step(Direction::Right)];
        g.update();
        assert!(g.is_finished());
    }

    #[test]
    fn reaching_the_win_score_finishes_the_game() {
        let mut g = Game::new(
            &GameConfig::default()
                .with_size(40, 20)
                .with_win_score(SCORE_PER_FOOD),
        )
        .unwrap();
        g.food = g.snake().head().step(Direction::Right);
        g.update();
        assert!(g.is_finished());
        assert!(g.is_won());
        assert_eq!(g.score(), SCORE_PER_FOOD);
    }

    #[test]
    fn update_is_a_no_op_once_finished() {
        let mut g = game(10, 10);
        g.food = Point::new(1, 1);
        for _ in 0..4 {
            g.update();
        }
        assert!(g.is_finished());
        let head = g.snake().head();
        let score = g.score();
        for _ in 0..3 {
            g.update();
        }
        assert_eq!(g.snake().head(), head);
        assert_eq!(g.score(), score);
        assert!(g.is_finished());
    }

    #[test]
    fn help_flag_is_advisory_only() {
        let mut g = game(40, 20);
        g.food = Point::new(1, 1);
        g.toggle_help();
        assert!(g.help_active());
        let head = g.snake().head();
        g.update();
        // The core does not pause itself; skipping update is the session's job.
        assert_eq!(g.snake().head(), head.step(Direction::Right));
        g.toggle_help();
        assert!(!g.help_active());
    }

    #[test]
    fn reset_restores_the_start_but_keeps_obstacles() {
        let mut g = Game::new(
            &GameConfig::default()
                .with_size(50, 50)
                .with_obstacles(true)
                .with_seed(7),
        )
        .unwrap();
        let obstacles: Vec<Point> = g.obstacles().to_vec();
        g.food = g.snake().head().step(Direction::Right);
        g.update();
        g.toggle_help();
        for _ in 0..30 {
            g.update();
        }
        assert!(g.is_finished());
        g.reset();
        assert_eq!(g.score(), 0);
        assert!(!g.is_finished());
        assert!(!g.help_active());
        assert_eq!(g.snake().head(), Point::new(25, 25));
        assert_eq!(g.snake().len(), INITIAL_LENGTH);
        assert_eq!(g.snake().direction(), Direction::Right);
        assert_eq!(g.obstacles(), obstacles.as_slice());
        assert!(interior(&g, g.food()));
    }

    #[test]
    fn fifty_by_fifty_board_gets_twenty_five_obstacles() {
        let g = Game::new(
            &GameConfig::default()
                .with_size(50, 50)
                .with_obstacles(true)
                .with_seed(3),
        )
        .unwrap();
        let obstacles = g.obstacles();
        assert_eq!(obstacles.len(), 25);
        for (i, &a) in obstacles.iter().enumerate() {
            assert!(interior(&g, a));
            assert!(!g.snake().occupies(a));
            assert_ne!(a, g.food());
            for &b in &obstacles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn smallest_board_gets_one_obstacle() {
        let g = Game::new(
            &GameConfig::default()
                .with_size(10, 10)
                .with_obstacles(true),
        )
        .unwrap();
        assert_eq!(g.obstacles().len(), 1);
    }

    #[test]
    fn obstacles_are_off_by_default() {
        assert!(game(40, 20).obstacles().is_empty());
    }

    #[test]
    fn same_seed_means_same_layout() {
        let config = GameConfig::default()
            .with_size(30, 30)
            .with_obstacles(true)
            .with_seed(99);
        let mut a = Game::new(&config).unwrap();
        let mut b = Game::new(&config).unwrap();
        assert_eq!(a.food(), b.food());
        assert_eq!(a.obstacles(), b.obstacles());
        for _ in 0..5 {
            a.update();
            b.update();
        }
        assert_eq!(a.food(), b.food());
        assert_eq!(a.snake().head(), b.snake().head());
    }

    #[test]
    fn construction_rejects_bad_boards() {
        assert!(Game::new(&GameConfig::default().with_size(5, 5)).is_err());
        assert!(Game::new(&GameConfig::default().with_size(200, 20)).is_err());
    }

    #[test]
    fn food_regeneration_avoids_obstacles() {
        let mut g = Game::new(
            &GameConfig::default()
                .with_size(12, 12)
                .with_obstacles(true)
                .with_seed(5),
        )
        .unwrap();
        // Eat several times and check the fresh food never lands on the
        // snake, an obstacle, or outside the interior.
        for _ in 0..10 {
            g.food = g.snake().head().step(g.snake().direction());
            if g.hits_wall(g.food) {
                break;
            }
            g.update();
            if g.is_finished() {
                break;
            }
            assert!(interior(&g, g.food()));
            assert!(!g.snake().occupies(g.food()));
            assert!(!g.obstacles().contains(&g.food()));
        }
    }

    proptest! {
        #[test]
        fn initial_layout_is_always_interior(
            seed in any::<u64>(),
            w in 10i32..=40,
            h in 10i32..=40,
        ) {
            let g = Game::new(
                &GameConfig::default()
                    .with_size(w, h)
                    .with_obstacles(true)
                    .with_seed(seed),
            )
            .unwrap();
            prop_assert!(interior(&g, g.food()));
            for &p in g.obstacles() {
                prop_assert!(interior(&g, p));
            }
            prop_assert_eq!(g.obstacles().len(), (w * h / 100) as usize);
        }

        #[test]
        fn heading_never_reverses(turns in proptest::collection::vec(0u8..4, 1..64)) {
            let mut g = game(40, 20);
            g.food = Point::new(1, 1);
            for t in turns {
                let before = g.snake().direction();
                let cmd = match t {
                    0 => Command::MoveUp,
                    1 => Command::MoveDown,
                    2 => Command::MoveLeft,
                    _ => Command::MoveRight,
                };
                g.set_direction(cmd);
                prop_assert!(!before.is_opposite(g.snake().direction()));
            }
        }
    }
}
