//! Main application for the suicide checkers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};

use crate::board::Player;
use crate::rules::{EndReason, GameOutcome};
use crate::search::SearchConfig;

use super::board_view::{BoardView, Highlights};
use super::game_state::{GameMode, GameState};
use super::theme::*;

/// Main suicide checkers application
pub struct CheckersApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl CheckersApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, config: SearchConfig) -> Self {
        Self {
            state: GameState::new(mode, config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(mode, self.state.config());
    }

    fn undo(&mut self) {
        if let Err(err) = self.state.undo() {
            self.state.message = Some(err.to_string());
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - Black)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - White)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("vs AI - You: {}", human),
                        GameMode::PvP => "Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(12.0);
                    self.render_title_card(ui);
                    ui.add_space(12.0);

                    self.render_turn_card(ui);
                    ui.add_space(10.0);

                    self.render_pieces_card(ui);
                    ui.add_space(10.0);

                    self.render_moves_card(ui);
                    ui.add_space(10.0);

                    self.render_actions_card(ui);

                    if self.show_debug {
                        ui.add_space(10.0);
                        self.render_debug_card(ui);
                    }

                    if let Some(outcome) = self.state.game.outcome() {
                        ui.add_space(10.0);
                        self.render_game_over_card(ui, &outcome);
                    }

                    if let Some(msg) = &self.state.message {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, msg);
                    }
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("SUICIDE CHECKERS").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Lose all your pieces to win").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (fill, rim) = match turn {
                Player::Black => (BLACK_PIECE, BLACK_PIECE_RIM),
                Player::White => (WHITE_PIECE, WHITE_PIECE_RIM),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().circle_stroke(rect.center(), 15.0, egui::Stroke::new(2.0, rim));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        let secs = self
                            .state
                            .ai_thinking_elapsed()
                            .map_or(0.0, |d| d.as_secs_f32());
                        let color = if secs < 1.0 {
                            TIMER_NORMAL
                        } else if secs < 5.0 {
                            TIMER_WARNING
                        } else {
                            TIMER_CRITICAL
                        };
                        (format!("AI thinking... {:.1}s", secs), color)
                    } else if self.state.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        let secs = self.state.move_timer.elapsed().as_secs_f32();
                        (format!("Your turn ({:.0}s)", secs), TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Remaining pieces per side; fewer is better
    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES LEFT").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for player in Player::ALL {
                let count = self.state.game.board().piece_count(player);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.name()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(16.0).strong().color(TEXT_SECONDARY));
                    });
                });
            }
        });
    }

    /// Numbered legal moves; clicking one plays it
    fn render_moves_card(&mut self, ui: &mut egui::Ui) {
        let legal = self.state.game.legal_moves();
        let selectable = self.state.is_human_turn() && !self.state.is_ai_thinking();
        let mut chosen = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("VALID MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if legal.is_empty() {
                ui.label(RichText::new("None").size(11.0).color(TEXT_MUTED));
            }
            for (i, mv) in legal.iter().enumerate() {
                let mut text = format!("{}: {}", i + 1, mv);
                if mv.is_jump() {
                    text.push_str(&format!("  x{}", mv.captured().len()));
                }
                let highlighted = self.state.selected == Some(mv.start());
                let color = if highlighted { SELECTED } else { TEXT_PRIMARY };
                let label = egui::Label::new(RichText::new(text).size(12.0).monospace().color(color));
                let response = if selectable {
                    ui.add(label.sense(egui::Sense::click()))
                } else {
                    ui.add(label)
                };
                if response.clicked() {
                    chosen = Some(mv.clone());
                }
            }
        });

        if let Some(mv) = chosen {
            if let Err(err) = self.state.try_play(&mv) {
                self.state.message = Some(err.to_string());
            }
        }
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.undo();
                }
                if self.state.mode == GameMode::PvP && ui.button("Hint").clicked() {
                    self.state.request_suggestion();
                }
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Diagnostics of the last AI decision
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(TIMER_NORMAL));
            egui::Grid::new("ai_debug").num_columns(2).show(ui, |ui| {
                let rows = [
                    ("Value", result.score.to_string()),
                    ("Nodes", result.nodes.to_string()),
                    ("Max depth", result.max_depth.to_string()),
                    ("Max cutoffs", result.beta_cutoffs.to_string()),
                    ("Min cutoffs", result.alpha_cutoffs.to_string()),
                    ("Time", format!("{}ms", result.time_ms)),
                ];
                for (name, value) in rows {
                    ui.label(RichText::new(name).size(10.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(value).size(10.0).color(TEXT_PRIMARY));
                    ui.end_row();
                }
            });

            if let Some(mv) = &result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("-> {}", mv)).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        let headline = match outcome.winner {
            Some(player) => format!("{} WINS!", player.name().to_uppercase()),
            None => "IT'S A TIE".to_string(),
        };
        let reason = match outcome.reason {
            EndReason::NoPieces(player) => format!("{} has no pieces left", player),
            EndReason::NoMoves(player) => format!("{} has no legal move", player),
        };
        let [black, white] = outcome.score;

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(reason).size(11.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("Black {} - White {}", black, white))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let targets = self.state.selected_moves();
            let highlights = Highlights {
                selected: self.state.selected,
                targets: &targets,
                last_move: self.state.game.last_move(),
                captured: &self.state.last_captures,
                suggestion: self.state.suggested_move.as_ref(),
            };
            let accept_input = self.state.is_human_turn()
                && !self.state.is_ai_thinking()
                && !self.state.is_game_over();

            let clicked = self
                .board_view
                .show(ui, self.state.game.board(), &highlights, accept_input);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.click(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint && self.state.mode == GameMode::PvP {
            self.state.request_suggestion();
        }
        if undo {
            self.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else {
            // Keep the move timer ticking
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
