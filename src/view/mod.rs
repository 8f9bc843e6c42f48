use crate::domain::board::{Board, ColumnId};
use crate::domain::card::CardId;
use serde::Serialize;

pub mod projector;

/// A column registered with the provider as a drop target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropContainer {
    pub id: ColumnId,
}

/// A card registered with the provider as a draggable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraggableItem {
    pub id: CardId,
    pub container: ColumnId,
    pub index: usize,
}

/// Drag-and-drop capability provider
///
/// The external gesture backend the widget delegates pointer handling to.
/// This crate never implements gesture detection itself: the host hands the
/// provider the current drop containers and draggable items on every render
/// pass, and reports gesture completions back through
/// [`BoardController::on_drag_end`](crate::controller::BoardController::on_drag_end).
pub trait DragDropProvider {
    /// Registers the drop containers and draggable items for the next gesture
    fn register(&mut self, containers: &[DropContainer], items: &[DraggableItem]);
}

/// Builds provider registrations for every column and card on the board
///
/// Containers follow column display order; items carry their position within
/// their column so the provider can report source indices on completion.
pub fn registrations(board: &Board) -> (Vec<DropContainer>, Vec<DraggableItem>) {
    let containers = board
        .columns
        .iter()
        .map(|column| DropContainer {
            id: column.id.clone(),
        })
        .collect();

    let mut items = Vec::with_capacity(board.cards.len());
    for column in &board.columns {
        for (index, card_id) in column.card_order.iter().enumerate() {
            items.push(DraggableItem {
                id: card_id.clone(),
                container: column.id.clone(),
                index,
            });
        }
    }

    (containers, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::{BoardConfig, ColumnConfig};
    use crate::domain::card::Card;

    fn two_column_board() -> Board {
        Board::new(BoardConfig {
            columns: vec![
                ColumnConfig::new(ColumnId::new("a"), "A".to_string())
                    .with_card(Card::new(CardId::new("1"), "One".to_string()))
                    .with_card(Card::new(CardId::new("2"), "Two".to_string())),
                ColumnConfig::new(ColumnId::new("b"), "B".to_string())
                    .with_card(Card::new(CardId::new("3"), "Three".to_string())),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_registrations_cover_every_column_and_card() {
        let board = two_column_board();

        let (containers, items) = registrations(&board);

        assert_eq!(containers.len(), 2);
        assert_eq!(containers[0].id.as_str(), "a");
        assert_eq!(containers[1].id.as_str(), "b");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_item_indices_restart_per_container() {
        let board = two_column_board();

        let (_, items) = registrations(&board);

        assert_eq!(items[0].container.as_str(), "a");
        assert_eq!(items[0].index, 0);
        assert_eq!(items[1].index, 1);
        assert_eq!(items[2].container.as_str(), "b");
        assert_eq!(items[2].index, 0);
    }

    #[test]
    fn test_empty_column_still_registered_as_container() {
        let board = Board::new(BoardConfig {
            columns: vec![ColumnConfig::new(ColumnId::new("a"), "A".to_string())],
        })
        .unwrap();

        let (containers, items) = registrations(&board);

        assert_eq!(containers.len(), 1);
        assert!(items.is_empty());
    }
}
