//! Collection view engine: search + pagination over in-memory records.
//!
//! Every CRUD screen in the console renders a table over a list the backend
//! already returned in full. This crate owns the shared math for that:
//! substring search over named fields, page slicing, and the page-reset and
//! clamping rules that keep the cursor valid as the data underneath changes.
//!
//! The engine is pure and synchronous: callers mutate a [`ViewState`]
//! through its setters, then call [`compute`] (or
//! [`CollectionView::recompute`]) and render the returned slice. No hidden
//! dependency tracking, no I/O.

pub mod engine;
pub mod state;

pub use engine::{CollectionView, Searchable, ViewResult, compute};
pub use state::ViewState;
