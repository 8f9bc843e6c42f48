//! # Cardwall Core
//!
//! Board state and drag-and-drop reordering logic for the Cardwall kanban
//! widget.
//!
//! This crate provides the board model, the pure reducer that applies
//! drag-completion events, and the projection a rendering host consumes,
//! without any dependency on a specific UI toolkit or gesture-detection
//! backend. Gesture detection belongs to an external provider reached
//! through the [`DragDropProvider`] trait; completed gestures come back as
//! [`DragEnd`] events through [`BoardController::on_drag_end`].

pub mod controller;
pub mod domain;
pub mod error;
pub mod view;

// Re-export commonly used types
pub use controller::BoardController;
pub use domain::{
    board::{Board, BoardConfig, Column, ColumnConfig, ColumnId},
    card::{Card, CardId},
    drag::{DragEnd, DragLocation},
};
pub use error::{CardwallError, Result};
pub use view::{
    projector::{BoardView, CardView, ColumnView, DragFeedback},
    registrations, DragDropProvider, DraggableItem, DropContainer,
};
