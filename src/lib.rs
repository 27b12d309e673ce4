//! Item Form
//!
//! Editing engine for inventory items: an immutable-update draft of an item
//! and its colour variants and stock, nested validation with remote variant
//! code checks, and a submission coordinator that uploads the item's image,
//! persists the item and guards against repeated submits.

pub mod config;
pub mod form;
pub mod items;
pub mod observability;
pub mod prelude;
pub mod services;
pub mod submission;
pub mod validation;
