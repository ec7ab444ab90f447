use super::{
    action::Direction,
    config::GameConfig,
    state::{Cell, GameState, Snake},
};
use rand::Rng;

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether the game-over latch is set
    pub game_over: bool,
}

/// The game engine that handles all game logic
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

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Set up the initial state: a horizontal snake heading right, food
    /// placed off the snake, score zero.
    pub fn reset(&mut self) -> GameState {
        let center = Cell::new(self.config.grid_width / 2, self.config.grid_height / 2);

        let snake = Snake::new(center, Direction::Right, self.config.initial_snake_length);

        let food = self.spawn_food(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Advance the game by one tick.
    ///
    /// At most one steering input is applied per tick; a steer that
    /// reverses the current direction is ignored. Once the game-over latch
    /// is set the board is frozen and ticks become no-ops, but the caller
    /// keeps rendering the final scene.
    pub fn tick(&mut self, state: &mut GameState, steer: Option<Direction>) -> TickOutcome {
        if let Some(direction) = steer {
            if direction != state.snake.direction.opposite() {
                state.snake.direction = direction;
            }
        }

        if state.game_over {
            return TickOutcome {
                ate_food: false,
                game_over: true,
            };
        }

        let new_head = state.wrap(state.snake.head().moved_in_direction(state.snake.direction));
        state.snake.advance(new_head);

        // Detection runs after the move: the colliding move stays applied
        // and is rendered.
        if state.snake.collides_with_body(new_head) {
            state.game_over = true;
        }

        let ate_food = new_head == state.food;
        if ate_food {
            state.snake.grow(state.food);
            state.score += self.config.food_reward;
            state.food = self.spawn_food(&state.snake);
        }

        TickOutcome {
            ate_food,
            game_over: state.game_over,
        }
    }

    /// Rejection-sample a food cell not occupied by the snake. The grid is
    /// far larger than the snake, so the loop terminates quickly.
    fn spawn_food(&mut self, snake: &Snake) -> Cell {
        loop {
            let x = self.rng.gen_range(0..self.config.grid_width);
            let y = self.rng.gen_range(0..self.config.grid_height);
            let cell = Cell::new(x, y);

            if !snake.body.contains(&cell) {
                return cell;
            }
        }
    }
}
