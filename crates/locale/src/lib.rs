//! Translatable messages with named substitutions.
//!
//! This crate contains the localization seam only; actual locale catalogs
//! live in the embedding application behind the [`Localizer`] trait.

pub mod message;

pub use message::{Localizer, Message, NullLocalizer, render_template};
