//! Board representation for suicide checkers

pub mod board;
pub mod moves;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use moves::Move;

/// Board size (6x6)
pub const BOARD_SIZE: usize = 6;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 36

/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Starts on rows 4-5 and moves toward row 0
    Black,
    /// Starts on rows 0-1 and moves toward row 5
    White,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Row step of a forward move
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Player::Black => -1,
            Player::White => 1,
        }
    }

    /// Far row. Pieces standing on it have no forward move left.
    #[inline]
    pub fn last_row(self) -> u8 {
        match self {
            Player::Black => 0,
            Player::White => (BOARD_SIZE - 1) as u8,
        }
    }

    /// Index into per-player tables (`[black, white]`)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }

    /// Single-letter symbol used in text rendering
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[inline]
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Forward diagonal relative to the board's column axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// Toward column 0
    Left,
    /// Toward column 5
    Right,
}

impl Diagonal {
    /// Probe order used by move generation
    pub const BOTH: [Diagonal; 2] = [Diagonal::Left, Diagonal::Right];

    #[inline]
    pub fn col_step(self) -> i32 {
        match self {
            Diagonal::Left => -1,
            Diagonal::Right => 1,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Cell reached by `steps` diagonal steps forward for `player`, if on the board
    #[inline]
    pub fn step(self, player: Player, diagonal: Diagonal, steps: i32) -> Option<Pos> {
        let row = self.row as i32 + player.forward() * steps;
        let col = self.col as i32 + diagonal.col_step() * steps;
        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
