//! Core domain types for armorial.
//!
//! This module contains the value types the pipeline passes around:
//! - `Tincture` - plain or composite-pattern tinctures
//! - `Emblem` - the abstract heraldic achievement
//! - `Division`, `Ordinary`, `Charge` - the parts of an emblem

mod emblem;
mod tincture;

pub use emblem::{dedup_code, Charge, DividedMode, Division, Emblem, Ordinary};
pub use tincture::{PatternSize, PatternSpec, Tincture, TinctureCategory};
