use super::{
    config::GameConfig,
    grid::{Cell, Grid},
    heading::Heading,
    state::{CollisionKind, GamePhase, GameState, Snake},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Set when the tick ended the game
    pub collision: Option<CollisionKind>,
}

impl TickOutcome {
    pub fn game_over(&self) -> bool {
        self.collision.is_some()
    }
}

/// The game engine that advances states tick by tick and owns apple placement
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Build a fresh running state: snake centered heading right, apple
    /// somewhere in the interior, score zero
    pub fn reset(&mut self) -> GameState {
        let grid = Grid::new(
            i32::from(self.config.grid_width),
            i32::from(self.config.grid_height),
        );
        let snake = Snake::new(grid.center(), Heading::Right, self.config.initial_snake_length);
        let apple = self.place_apple(&grid, &snake);

        GameState::new(grid, snake, apple)
    }

    /// Advance `state` by one simulation step
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.phase == GamePhase::GameOver {
            return TickOutcome {
                ate_apple: false,
                collision: None,
            };
        }

        // Buffered steering takes effect first, then the head steps
        let heading = state.snake.apply_pending();
        let next = state.snake.head().step(heading);

        if let Some(kind) = self.check_collision(state, next) {
            state.phase = GamePhase::GameOver;

            return TickOutcome {
                ate_apple: false,
                collision: Some(kind),
            };
        }

        let ate_apple = next == state.apple;
        state.snake.advance(next, ate_apple);

        if ate_apple {
            state.score += 1;
            state.apple = self.place_apple(&state.grid, &state.snake);
        }

        TickOutcome {
            ate_apple,
            collision: None,
        }
    }

    /// Check whether moving the head onto `next` ends the game
    fn check_collision(&self, state: &GameState, next: Cell) -> Option<CollisionKind> {
        if state.grid.is_wall(next) {
            return Some(CollisionKind::Wall);
        }

        // every segment counts, the tail included
        if state.snake.occupies(next) {
            return Some(CollisionKind::SelfCollision);
        }

        None
    }

    /// Pick a random interior cell for the apple, off the snake. Bounded
    /// rejection sampling first, then a scan of the interior; when the snake
    /// covers every interior cell the apple stays wherever the sample lands
    /// and the next tick ends the game on its own.
    fn place_apple(&mut self, grid: &Grid, snake: &Snake) -> Cell {
        for _ in 0..64 {
            let cell = grid.random_interior(&mut self.rng);
            if !snake.occupies(cell) {
                return cell;
            }
        }

        grid.interior_cells()
            .find(|&cell| !snake.occupies(cell))
            .unwrap_or_else(|| grid.random_interior(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on_small_grid(snake: Snake, apple: Cell) -> GameState {
        GameState::new(Grid::new(10, 10), snake, apple)
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), state.grid.center());
        assert!(state.grid.is_interior(state.apple));
        assert!(!state.snake.occupies(state.apple));
    }

    #[test]
    fn test_moving_preserves_length() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);
        let mut state = state_on_small_grid(snake, Cell::new(2, 8));

        let outcome = engine.tick(&mut state);

        assert!(!outcome.ate_apple);
        assert!(!outcome.game_over());
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_eating_grows_and_relocates_apple() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);
        let old_apple = Cell::new(6, 5);
        let mut state = state_on_small_grid(snake, old_apple);

        let outcome = engine.tick(&mut state);

        assert!(outcome.ate_apple);
        assert!(!outcome.game_over());
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        assert_ne!(state.apple, old_apple);
        assert!(state.grid.is_interior(state.apple));
        assert!(!state.snake.occupies(state.apple));
    }

    #[test]
    fn test_wall_collision_on_every_side() {
        let cases = [
            (Cell::new(1, 5), Heading::Left),
            (Cell::new(8, 5), Heading::Right),
            (Cell::new(5, 1), Heading::Up),
            (Cell::new(5, 8), Heading::Down),
        ];

        for (head, heading) in cases {
            let mut engine = GameEngine::new(GameConfig::small());
            let snake = Snake::new(head, heading, 3);
            let mut state = state_on_small_grid(snake, Cell::new(4, 4));

            let outcome = engine.tick(&mut state);

            assert_eq!(outcome.collision, Some(CollisionKind::Wall));
            assert!(!state.is_running());
            // the snake does not move onto the wall
            assert_eq!(state.snake.head(), head);
            assert_eq!(state.snake.len(), 3);
        }
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::new(GameConfig::small());
        // Body: (5,5), (4,5), (3,5), (2,5)
        let snake = Snake::new(Cell::new(5, 5), Heading::Right, 4);
        let mut state = state_on_small_grid(snake, Cell::new(8, 8));

        // Right: (6,5), (5,5), (4,5), (3,5)
        engine.tick(&mut state);
        // Down: (6,6), (6,5), (5,5), (4,5)
        state.snake.set_heading(Heading::Down);
        engine.tick(&mut state);
        // Left: (5,6), (6,6), (6,5), (5,5)
        state.snake.set_heading(Heading::Left);
        engine.tick(&mut state);
        // Up aims at (5,5), the current tail cell
        state.snake.set_heading(Heading::Up);
        let outcome = engine.tick(&mut state);

        assert_eq!(outcome.collision, Some(CollisionKind::SelfCollision));
        assert!(!state.is_running());
    }

    #[test]
    fn test_opposite_steering_is_ignored() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);
        let mut state = state_on_small_grid(snake, Cell::new(2, 8));

        state.snake.set_heading(Heading::Left);
        let outcome = engine.tick(&mut state);

        assert!(!outcome.game_over());
        assert_eq!(state.snake.head(), Cell::new(6, 5));
        assert_eq!(state.snake.heading(), Heading::Right);
    }

    #[test]
    fn test_buffered_steering_applies_on_next_tick() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);
        let mut state = state_on_small_grid(snake, Cell::new(2, 8));

        state.snake.set_heading(Heading::Up);
        engine.tick(&mut state);

        assert_eq!(state.snake.head(), Cell::new(5, 4));
        assert_eq!(state.snake.heading(), Heading::Up);
    }

    #[test]
    fn test_game_over_tick_is_a_noop() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = Snake::new(Cell::new(1, 5), Heading::Left, 3);
        let mut state = state_on_small_grid(snake, Cell::new(4, 4));

        engine.tick(&mut state);
        assert!(!state.is_running());

        let before = state.clone();
        let outcome = engine.tick(&mut state);

        assert!(!outcome.ate_apple);
        assert_eq!(outcome.collision, None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = Snake::new(Cell::new(1, 5), Heading::Left, 3);
        let mut state = state_on_small_grid(snake, Cell::new(4, 4));
        state.score = 7;

        engine.tick(&mut state);
        assert!(!state.is_running());

        let state = engine.reset();
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_apple_placement_avoids_snake() {
        let mut engine = GameEngine::new(GameConfig::small());
        // 3x3 interior with the middle row fully occupied
        let grid = Grid::new(5, 5);
        let snake = Snake::new(Cell::new(3, 2), Heading::Right, 3);

        for _ in 0..100 {
            let apple = engine.place_apple(&grid, &snake);
            assert!(grid.is_interior(apple));
            assert!(!snake.occupies(apple));
        }
    }
}
