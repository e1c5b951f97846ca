//! Application state and logic.

use super::input::{self, Action};
use crate::games::tictactoe::{
    DisplayOrder, GameError, GameSession, MoveOutcome, Position, ViewState,
};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

/// Main application state: the session plus cursor positions.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(display_order: DisplayOrder) -> Self {
        Self {
            session: GameSession::with_display_order(display_order),
            cursor: Position::Center,
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Builds the view for the next frame.
    pub fn view(&self) -> Result<ViewState, GameError> {
        self.session.view_state()
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Row of the move list under the selection cursor.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), GameError> {
        let Some(action) = input::action_for(key) else {
            return Ok(());
        };
        debug!(?action, "Handling action");
        self.message = None;

        match action {
            Action::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::PlayCursor => self.play(self.cursor)?,
            Action::Play(position) => {
                self.cursor = position;
                self.play(position)?;
            }
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::SelectNext => {
                let last = self.session.history().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            Action::JumpToSelected => {
                let moves = self.session.moves()?;
                if let Some(descriptor) = moves.get(self.selected) {
                    self.session.jump_to(*descriptor.move_number())?;
                }
            }
            Action::ToggleOrder => {
                self.session.toggle_display_order();
                self.selected = self.session.history().len() - 1 - self.selected;
            }
            Action::Quit => self.should_quit = true,
        }
        Ok(())
    }

    fn play(&mut self, position: Position) -> Result<(), GameError> {
        match self.session.play_move(position.to_index())? {
            MoveOutcome::Placed { .. } => self.select_current()?,
            MoveOutcome::Ignored(reason) => self.message = Some(format!("Ignored: {}", reason)),
        }
        Ok(())
    }

    /// Points the selection at the move on display.
    fn select_current(&mut self) -> Result<(), GameError> {
        let moves = self.session.moves()?;
        self.selected = moves.iter().position(|m| *m.is_current()).unwrap_or(0);
        Ok(())
    }
}
