use crate::domain::card::{Card, CardId};
use crate::domain::drag::DragEnd;
use crate::error::{CardwallError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Unique identifier for a column (e.g., column-1)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a new ColumnId from a stable string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered container of card references
///
/// A column owns the ordering of its cards, not the card records
/// themselves; those live in the board's card map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub card_order: Vec<CardId>,
}

impl Column {
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            card_order: Vec::new(),
        }
    }

    /// Number of cards currently held by the column
    pub fn len(&self) -> usize {
        self.card_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.card_order.is_empty()
    }
}

/// Initial contents of a single column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl ColumnConfig {
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            cards: Vec::new(),
        }
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }
}

/// Board configuration
///
/// The fixed literal the widget is constructed from; column display order
/// follows the order of `columns` and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnConfig::new(ColumnId::new("column-1"), "To Do".to_string())
                    .with_card(Card::new(CardId::new("item-1"), "Item 1".to_string()))
                    .with_card(Card::new(CardId::new("item-2"), "Item 2".to_string())),
                ColumnConfig::new(ColumnId::new("column-2"), "Done".to_string()),
            ],
        }
    }
}

/// Kanban board state
///
/// Normalized representation: columns carry order sequences of card ids,
/// card records live once in `cards`. A board value is replaced wholesale
/// by each accepted drag event, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub cards: HashMap<CardId, Card>,
}

impl Board {
    /// Builds a board from its initial configuration
    ///
    /// Rejects configurations that would violate the board invariants:
    /// duplicate column ids, or a card id appearing more than once.
    pub fn new(config: BoardConfig) -> Result<Self> {
        let mut columns: Vec<Column> = Vec::with_capacity(config.columns.len());
        let mut cards = HashMap::new();

        for column_config in config.columns {
            if columns.iter().any(|c| c.id == column_config.id) {
                return Err(CardwallError::DuplicateColumn(column_config.id.to_string()));
            }

            let mut column = Column::new(column_config.id, column_config.title);
            for card in column_config.cards {
                if cards.contains_key(&card.id) {
                    return Err(CardwallError::DuplicateCard(card.id.to_string()));
                }
                column.card_order.push(card.id.clone());
                cards.insert(card.id.clone(), card);
            }
            columns.push(column);
        }

        Ok(Self { columns, cards })
    }

    /// Gets a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    /// Gets a card record by id
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Applies a completed drag gesture and returns the next board state
    ///
    /// Pure with respect to `self`: the prior board is never modified.
    /// Events with no destination, or with a destination identical to the
    /// source, return the prior state unchanged. Events referencing columns,
    /// cards, or positions the board does not hold indicate the provider and
    /// the board have desynchronized and are rejected without touching any
    /// column.
    pub fn apply_drag(&self, drag: &DragEnd) -> Result<Board> {
        let destination = match &drag.destination {
            // Released outside every drop container
            Some(destination) => destination,
            None => return Ok(self.clone()),
        };

        // Dropped back onto the exact original slot
        if *destination == drag.source {
            return Ok(self.clone());
        }

        let source_pos = self
            .columns
            .iter()
            .position(|col| col.id == drag.source.column_id)
            .ok_or_else(|| CardwallError::ColumnNotFound(drag.source.column_id.to_string()))?;
        let destination_pos = self
            .columns
            .iter()
            .position(|col| col.id == destination.column_id)
            .ok_or_else(|| CardwallError::ColumnNotFound(destination.column_id.to_string()))?;

        let source_column = &self.columns[source_pos];
        match source_column.card_order.get(drag.source.index) {
            None => {
                return Err(CardwallError::IndexOutOfRange {
                    column: source_column.id.to_string(),
                    index: drag.source.index,
                    len: source_column.len(),
                });
            }
            Some(held) if *held != drag.card_id => {
                return Err(CardwallError::DraggedCardMismatch {
                    column: source_column.id.to_string(),
                    index: drag.source.index,
                    event: drag.card_id.to_string(),
                    board: held.to_string(),
                });
            }
            Some(_) => {}
        }

        if !self.cards.contains_key(&drag.card_id) {
            return Err(CardwallError::CardNotFound(drag.card_id.to_string()));
        }

        // The insertion point is relative to the destination order after the
        // removal; within the source column that order is one shorter.
        let destination_column = &self.columns[destination_pos];
        let insert_limit = if source_pos == destination_pos {
            destination_column.len() - 1
        } else {
            destination_column.len()
        };
        if destination.index > insert_limit {
            return Err(CardwallError::IndexOutOfRange {
                column: destination_column.id.to_string(),
                index: destination.index,
                len: insert_limit,
            });
        }

        // Splice out of the source order, then into the destination order.
        // Only the affected columns change; every other column and all card
        // records carry over unchanged.
        let mut next = self.clone();
        next.columns[source_pos].card_order.remove(drag.source.index);
        next.columns[destination_pos]
            .card_order
            .insert(destination.index, drag.card_id.clone());

        Ok(next)
    }

    /// Checks the board invariants
    ///
    /// Every card id referenced by a column resolves to a card record and
    /// appears exactly once across the whole board; every card record is
    /// referenced by some column; column ids are unique.
    pub fn check_integrity(&self) -> Result<()> {
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.id == column.id) {
                return Err(CardwallError::DuplicateColumn(column.id.to_string()));
            }
        }

        let mut referenced = HashSet::new();
        for column in &self.columns {
            for card_id in &column.card_order {
                if !self.cards.contains_key(card_id) {
                    return Err(CardwallError::CardNotFound(card_id.to_string()));
                }
                if !referenced.insert(card_id) {
                    return Err(CardwallError::DuplicateCard(card_id.to_string()));
                }
            }
        }

        for card_id in self.cards.keys() {
            if !referenced.contains(card_id) {
                return Err(CardwallError::OrphanCard(card_id.to_string()));
            }
        }

        Ok(())
    }
}
