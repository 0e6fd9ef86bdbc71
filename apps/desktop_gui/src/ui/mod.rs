//! UI layer for desktop GUI: app shell and the selection field widget.

pub mod app;
pub mod widgets;

pub use app::BookRecommenderApp;
