use crate::domain::board::ColumnId;
use crate::domain::card::CardId;
use serde::{Deserialize, Serialize};

/// Position of a card slot within a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub column_id: ColumnId,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: ColumnId, index: usize) -> Self {
        Self { column_id, index }
    }
}

/// Completion of a drag gesture, as reported by the drag-and-drop provider
///
/// A missing destination means the card was released outside every
/// registered drop container; such an event leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub card_id: CardId,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    /// Creates a completion event for a drag that landed on a drop container
    pub fn new(card_id: CardId, source: DragLocation, destination: DragLocation) -> Self {
        Self {
            card_id,
            source,
            destination: Some(destination),
        }
    }

    /// Creates a completion event for a drag released outside any container
    pub fn cancelled(card_id: CardId, source: DragLocation) -> Self {
        Self {
            card_id,
            source,
            destination: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_end_creation() {
        let event = DragEnd::new(
            CardId::new("item-1"),
            DragLocation::new(ColumnId::new("column-1"), 0),
            DragLocation::new(ColumnId::new("column-2"), 2),
        );

        assert_eq!(event.card_id.as_str(), "item-1");
        assert_eq!(event.source.index, 0);
        assert_eq!(
            event.destination,
            Some(DragLocation::new(ColumnId::new("column-2"), 2))
        );
    }

    #[test]
    fn test_cancelled_drag_has_no_destination() {
        let event = DragEnd::cancelled(
            CardId::new("item-1"),
            DragLocation::new(ColumnId::new("column-1"), 1),
        );

        assert!(event.destination.is_none());
    }

    #[test]
    fn test_drag_end_serialization_round_trip() {
        let event = DragEnd::new(
            CardId::new("item-2"),
            DragLocation::new(ColumnId::new("column-1"), 1),
            DragLocation::new(ColumnId::new("column-1"), 0),
        );

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DragEnd = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_drag_end_deserializes_null_destination() {
        let json = r#"{
            "card_id": "item-1",
            "source": { "column_id": "column-1", "index": 0 },
            "destination": null
        }"#;

        let event: DragEnd = serde_json::from_str(json).unwrap();
        assert_eq!(event.card_id.as_str(), "item-1");
        assert!(event.destination.is_none());
    }
}
