use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a card (e.g., item-1)
///
/// Card ids are opaque stable strings supplied by the initial board
/// configuration; they survive every reorder and column move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Creates a new CardId from a stable string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card on the board
///
/// Cards are immutable once created: a drag gesture relocates a card, it
/// never edits one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub content: String,
}

impl Card {
    /// Creates a new card with the given id and content
    pub fn new(id: CardId, content: String) -> Self {
        Self { id, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_display_matches_as_str() {
        let id = CardId::new("item-1");
        assert_eq!(id.as_str(), "item-1");
        assert_eq!(id.to_string(), "item-1");
    }

    #[test]
    fn test_card_creation() {
        let card = Card::new(CardId::new("item-1"), "Item 1".to_string());
        assert_eq!(card.id.as_str(), "item-1");
        assert_eq!(card.content, "Item 1");
    }

    #[test]
    fn test_card_id_serializes_as_plain_string() {
        let id = CardId::new("item-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"item-7\"");

        let parsed: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_card_serialization_round_trip() {
        let card = Card::new(CardId::new("item-1"), "Item 1".to_string());
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, card);
    }
}
