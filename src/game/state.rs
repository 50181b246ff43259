use super::grid::{Cell, Grid};
use super::heading::Heading;

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake hit the wall ring
    Wall,
    /// Snake hit its own body
    SelfCollision,
}

/// Phase of the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// The snake, an ordered chain of cells with the head first.
///
/// The chain is private: segments only change through [`Snake::advance`], and
/// steering only changes the buffered pending heading, which is folded into
/// the applied heading at the start of the next tick. A key press can
/// therefore never reverse the snake mid-tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Vec<Cell>,
    heading: Heading,
    pending: Heading,
}

impl Snake {
    /// Lay out a snake of `length` cells with `head` leading, the body
    /// extending backwards against `heading`
    pub fn new(head: Cell, heading: Heading, length: usize) -> Self {
        let (dc, dr) = heading.delta();
        let segments = (0..length as i32)
            .map(|i| Cell::new(head.col - dc * i, head.row - dr * i))
            .collect();

        Self {
            segments,
            heading,
            pending: heading,
        }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    /// True if any segment occupies `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// The heading the last tick moved along
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Buffer a steering input for the next tick. A heading that is the
    /// exact opposite of the applied one is ignored.
    pub fn set_heading(&mut self, heading: Heading) {
        if !heading.is_opposite(self.heading) {
            self.pending = heading;
        }
    }

    /// Fold the buffered heading into the applied one; returns the heading
    /// the next step moves along
    pub fn apply_pending(&mut self) -> Heading {
        self.heading = self.pending;
        self.heading
    }

    /// Prepend an already-validated new head. The tail is retained when
    /// growing and dropped otherwise.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.segments.insert(0, new_head);

        if !grow {
            self.segments.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Complete state of one game, recreated by the engine on reset
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Cell,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(grid: Grid, snake: Snake, apple: Cell) -> Self {
        Self {
            grid,
            snake,
            apple,
            score: 0,
            phase: GamePhase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.segments()[1], Cell::new(4, 5));
        assert_eq!(snake.segments()[2], Cell::new(3, 5));
        assert_eq!(snake.heading(), Heading::Right);
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);

        // advance without growing
        snake.advance(Cell::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert!(!snake.occupies(Cell::new(3, 5)));

        // advance with growing
        snake.advance(Cell::new(7, 5), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(7, 5));
    }

    #[test]
    fn test_occupies_includes_every_segment() {
        let snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);
        assert!(snake.occupies(Cell::new(5, 5))); // head
        assert!(snake.occupies(Cell::new(4, 5))); // body
        assert!(snake.occupies(Cell::new(3, 5))); // tail
        assert!(!snake.occupies(Cell::new(6, 5)));
    }

    #[test]
    fn test_opposite_heading_rejected() {
        let mut snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);

        snake.set_heading(Heading::Left);
        assert_eq!(snake.apply_pending(), Heading::Right);
    }

    #[test]
    fn test_heading_buffered_until_applied() {
        let mut snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);

        snake.set_heading(Heading::Up);
        assert_eq!(snake.heading(), Heading::Right);
        assert_eq!(snake.apply_pending(), Heading::Up);
        assert_eq!(snake.heading(), Heading::Up);
    }

    #[test]
    fn test_last_accepted_input_wins_within_a_tick() {
        let mut snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);

        // Up is buffered, Left is rejected against the applied heading,
        // Down overwrites the buffer
        snake.set_heading(Heading::Up);
        snake.set_heading(Heading::Left);
        snake.set_heading(Heading::Down);
        assert_eq!(snake.apply_pending(), Heading::Down);
    }

    #[test]
    fn test_game_state_starts_running() {
        let grid = Grid::new(10, 10);
        let snake = Snake::new(grid.center(), Heading::Right, 3);
        let state = GameState::new(grid, snake, Cell::new(3, 3));

        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
    }
}
