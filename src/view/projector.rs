use crate::domain::board::{Board, ColumnId};
use crate::domain::card::CardId;
use crate::error::{CardwallError, Result};
use serde::Serialize;

/// Transient styling flags reported by the provider during a gesture
///
/// Presentation-only: the projector copies them onto the view tree and the
/// reducer never reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragFeedback {
    pub dragging_card: Option<CardId>,
    pub active_drop_target: Option<ColumnId>,
}

/// Renderable card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub content: String,
    pub is_dragging: bool,
}

/// Renderable column with its cards resolved in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub is_drop_target: bool,
    pub cards: Vec<CardView>,
}

/// The full visual tree for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

/// Projects board state into the visual tree
///
/// Read-only over the board. Each column's order sequence is resolved
/// through the card map; an order entry with no card record means the board
/// was corrupted out-of-band and the projection fails rather than render a
/// hole.
pub fn project(board: &Board, feedback: &DragFeedback) -> Result<BoardView> {
    let mut columns = Vec::with_capacity(board.columns.len());

    for column in &board.columns {
        let mut cards = Vec::with_capacity(column.len());
        for card_id in &column.card_order {
            let card = board
                .card(card_id)
                .ok_or_else(|| CardwallError::CardNotFound(card_id.to_string()))?;
            cards.push(CardView {
                id: card.id.clone(),
                content: card.content.clone(),
                is_dragging: feedback.dragging_card.as_ref() == Some(&card.id),
            });
        }

        columns.push(ColumnView {
            id: column.id.clone(),
            title: column.title.clone(),
            is_drop_target: feedback.active_drop_target.as_ref() == Some(&column.id),
            cards,
        });
    }

    Ok(BoardView { columns })
}
