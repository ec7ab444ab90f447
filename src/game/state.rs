use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one unit in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells ordered tail-first: head is the last element
    pub body: Vec<Cell>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake of `length` cells lined up behind `head`
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let mut body = Vec::with_capacity(length);

        for i in (0..length).rev() {
            body.push(head.moved_by(-dx * i as i32, -dy * i as i32));
        }

        Self { body, direction }
    }

    /// Get the head position (newest cell)
    pub fn head(&self) -> Cell {
        *self.body.last().unwrap()
    }

    /// Get the tail position (oldest cell)
    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    /// Get body cells excluding the head
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[..self.body.len() - 1]
    }

    /// Check if a cell coincides with the snake body (excluding the head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().contains(&cell)
    }

    /// Advance by one cell: append the new head, drop the tail
    pub fn advance(&mut self, new_head: Cell) {
        self.body.push(new_head);
        self.body.remove(0);
    }

    /// Append one extra cell, extending the snake by one
    pub fn grow(&mut self, cell: Cell) {
        self.body.push(cell);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub grid_width: i32,
    pub grid_height: i32,
    pub score: u32,
    pub game_over: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Cell, grid_width: i32, grid_height: i32) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            game_over: false,
        }
    }

    /// Wrap a cell back onto the grid.
    ///
    /// Coordinates live in [0, max] inclusive: only values past the max or
    /// below zero wrap, so the max coordinate is reachable for one tick
    /// before the next move carries it to the opposite edge.
    pub fn wrap(&self, cell: Cell) -> Cell {
        let mut wrapped = cell;

        if wrapped.x > self.grid_width {
            wrapped.x = 0;
        }
        if wrapped.x < 0 {
            wrapped.x = self.grid_width;
        }
        if wrapped.y > self.grid_height {
            wrapped.y = 0;
        }
        if wrapped.y < 0 {
            wrapped.y = self.grid_height;
        }

        wrapped
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.body.contains(&cell)
    }

    /// Build the render payload for the current tick
    pub fn scene(&self) -> Scene {
        Scene {
            snake: self.snake.body.clone(),
            food: self.food,
            score: self.score,
        }
    }
}

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Snake cells, tail first
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
}
