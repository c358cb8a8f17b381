//! Board rendering for the suicide checkers GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Move, Player, Pos, BOARD_SIZE};

use super::theme::*;

/// Overlays drawn on top of the pieces
pub struct Highlights<'a> {
    pub selected: Option<Pos>,
    /// Moves of the selected piece, drawn as target dots
    pub targets: &'a [Move],
    pub last_move: Option<&'a Move>,
    pub captured: &'a [Pos],
    pub suggestion: Option<&'a Move>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        highlights: &Highlights<'_>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_squares(&painter);
        self.draw_coordinates(&painter);

        if let Some(mv) = highlights.last_move {
            self.draw_square_outline(&painter, mv.start(), LAST_MOVE);
            self.draw_square_outline(&painter, mv.end(), LAST_MOVE);
        }
        for &pos in highlights.captured {
            self.draw_cross(&painter, pos);
        }

        self.draw_pieces(&painter, board);

        if let Some(pos) = highlights.selected {
            self.draw_square_outline(&painter, pos, SELECTED);
        }
        for mv in highlights.targets {
            let center = self.board_to_screen(mv.end());
            painter.circle_filled(center, self.cell_size * MARKER_RADIUS_RATIO, target_marker());
        }
        if let Some(mv) = highlights.suggestion {
            self.draw_suggestion(&painter, mv);
        }

        if !accept_input || !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|pointer| self.screen_to_board(pointer))
    }

    /// Draw the 6x6 checkerboard
    fn draw_squares(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let color = if (row + col) % 2 == 0 {
                    DARK_SQUARE
                } else {
                    LIGHT_SQUARE
                };
                painter.rect_filled(self.square_rect(Pos::new(row as u8, col as u8)), 0.0, color);
            }
        }
    }

    /// Row and column numbers, matching the text board
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_TEXT);

            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_TEXT);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for player in Player::ALL {
            for &pos in board.pieces(player) {
                self.draw_piece(painter, pos, player);
            }
        }
    }

    fn draw_piece(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, rim) = match player {
            Player::Black => (BLACK_PIECE, BLACK_PIECE_RIM),
            Player::White => (WHITE_PIECE, WHITE_PIECE_RIM),
        };

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 3.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 70),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius * 0.75, Stroke::new(radius * 0.08, rim));
    }

    fn draw_square_outline(&self, painter: &Painter, pos: Pos, color: Color32) {
        let rect = self.square_rect(pos).shrink(2.0);
        painter.rect_stroke(rect, 0.0, Stroke::new(3.0, color), egui::StrokeKind::Inside);
    }

    /// Mark a square whose piece was just captured
    fn draw_cross(&self, painter: &Painter, pos: Pos) {
        let rect = self.square_rect(pos).shrink(self.cell_size * 0.3);
        let stroke = Stroke::new(3.0, CAPTURED_MARK);
        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
    }

    fn draw_suggestion(&self, painter: &Painter, mv: &Move) {
        let from = self.board_to_screen(mv.start());
        let to = self.board_to_screen(mv.end());
        painter.arrow(from, to - from, Stroke::new(4.0, hint_marker()));
    }

    fn square_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its square
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.square_rect(pos).center()
    }
}
