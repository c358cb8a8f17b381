//! Board structure with cached piece positions

use super::{Cell, Move, Player, Pos, BOARD_SIZE};

/// Starting layout, row 0 first. `W` = White, `B` = Black, `-` = empty.
pub const STARTING_LAYOUT: [&str; BOARD_SIZE] = [
    "W-W-W-", //
    "-W-W-W", //
    "------", //
    "------", //
    "B-B-B-", //
    "-B-B-B", //
];

/// Game board: the 6x6 grid plus one position list per player.
///
/// Invariant: `positions[p]` holds exactly the cells whose grid value is
/// `Occupied(p)`. Quiet moves update the list in place; anything that removes
/// pieces rebuilds both lists from the grid.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Cached piece positions, indexed by `Player::index()`
    positions: [Vec<Pos>; 2],
}

impl Board {
    /// Board with the default starting layout
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (row, line) in STARTING_LAYOUT.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'B' => Cell::Occupied(Player::Black),
                    'W' => Cell::Occupied(Player::White),
                    _ => Cell::Empty,
                };
                board.cells[row][col] = cell;
            }
        }
        board.recompute_positions();
        board
    }

    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            positions: [Vec::with_capacity(BOARD_SIZE), Vec::with_capacity(BOARD_SIZE)],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Owner of the piece at position, if any
    #[inline]
    pub fn occupant(&self, pos: Pos) -> Option<Player> {
        self.get(pos).occupant()
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Put a piece on the board (setup helper, not a game move)
    pub fn place_piece(&mut self, pos: Pos, player: Player) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Occupied(player);
        self.recompute_positions();
    }

    /// Clear a cell (setup helper, not a game move)
    pub fn remove_piece(&mut self, pos: Pos) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
        self.recompute_positions();
    }

    /// Cached positions of a player's pieces
    #[inline]
    pub fn pieces(&self, player: Player) -> &[Pos] {
        &self.positions[player.index()]
    }

    #[inline]
    pub fn piece_count(&self, player: Player) -> usize {
        self.positions[player.index()].len()
    }

    /// Legal moves for `player` under the forced-capture rule
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        crate::rules::legal_moves(self, player)
    }

    /// Commit a move for `player`. The move is trusted to be legal.
    pub fn apply_move(&mut self, mv: &Move, player: Player) {
        let start = mv.start();
        let end = mv.end();
        self.set(start, Cell::Empty);
        self.set(end, Cell::Occupied(player));

        if mv.is_jump() {
            for &captured in mv.captured() {
                self.set(captured, Cell::Empty);
            }
            self.recompute_positions();
        } else {
            let own = &mut self.positions[player.index()];
            if let Some(idx) = own.iter().position(|&p| p == start) {
                own.remove(idx);
            }
            own.push(end);
        }
    }

    #[inline]
    fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Rebuild both position lists from the grid in row-major order
    fn recompute_positions(&mut self) {
        for list in &mut self.positions {
            list.clear();
        }
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Cell::Occupied(player) = self.cells[row][col] {
                    self.positions[player.index()].push(Pos::new(row as u8, col as u8));
                }
            }
        }
    }
}

/// Boards are equal when their grids are; the cached lists may differ in order
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", row)?;
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '-',
                    Cell::Occupied(player) => player.symbol(),
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
