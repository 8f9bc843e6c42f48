use crate::domain::board::{Board, BoardConfig};
use crate::domain::drag::DragEnd;
use crate::error::Result;
use crate::view::projector::{project, BoardView, DragFeedback};
use crate::view::{registrations, DragDropProvider};

/// Owner of the single board-state cell for one widget instance
///
/// All mutation goes through [`BoardController::on_drag_end`], which keeps
/// the reducer itself pure: each accepted event replaces the board
/// wholesale, and between events the state never changes. The host's event
/// dispatch serializes calls, so the controller needs no locking.
pub struct BoardController {
    board: Board,
}

impl BoardController {
    /// Creates a controller with a board built from the given configuration
    pub fn new(config: BoardConfig) -> Result<Self> {
        Ok(Self {
            board: Board::new(config)?,
        })
    }

    /// Wraps an existing board, verifying its integrity first
    pub fn from_board(board: Board) -> Result<Self> {
        board.check_integrity()?;
        Ok(Self { board })
    }

    /// Current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Inbound gesture-completion callback for the drag provider
    ///
    /// An accepted event replaces the board with the reducer's output and
    /// returns the new state. A rejected event means the provider's
    /// registrations and the board have desynchronized: the board is left
    /// exactly as it was and the rejection is reported on the host's error
    /// channel.
    pub fn on_drag_end(&mut self, drag: &DragEnd) -> Result<&Board> {
        match self.board.apply_drag(drag) {
            Ok(next) => {
                self.board = next;
                Ok(&self.board)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    card = %drag.card_id,
                    source_column = %drag.source.column_id,
                    "rejected drag-completion event"
                );
                Err(err)
            }
        }
    }

    /// Projects the current state and re-registers drag targets with the
    /// provider for the next gesture
    pub fn render(
        &self,
        feedback: &DragFeedback,
        provider: &mut dyn DragDropProvider,
    ) -> Result<BoardView> {
        let view = project(&self.board, feedback)?;
        let (containers, items) = registrations(&self.board);
        provider.register(&containers, &items);
        Ok(view)
    }
}
