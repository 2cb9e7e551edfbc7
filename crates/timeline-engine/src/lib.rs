//! # timeline-engine
//!
//! Event selection, conflict grouping, and timeline geometry for a personal
//! calendar's day and week views.
//!
//! The engine consumes plain event records -- including records in the older
//! date-string shape still present in stored data -- and produces derived
//! view structures: filtered day/week lists, side-by-side conflict groups,
//! and block metrics on a 1440-minute axis. Every operation is a stateless
//! pure function of its arguments; inputs are never mutated and nothing is
//! cached, so results are recomputed per call and a corrupt record degrades
//! only itself.
//!
//! ## Modules
//!
//! - [`event`] — event model and raw-record normalization (both stored shapes)
//! - [`select`] — day and week selection
//! - [`conflict`] — overlap test and seed-based display grouping
//! - [`layout`] — vertical/horizontal block metrics for the timeline
//! - [`clock`] — clock-face formatting and the current-time indicator
//! - [`error`] — error types

pub mod clock;
pub mod conflict;
pub mod error;
pub mod event;
pub mod layout;
pub mod select;

pub use clock::{format_clock, is_now_visible, now_offset};
pub use conflict::{group_conflicts, overlap, ConflictGroup};
pub use error::EngineError;
pub use event::{events_from_json, Event, RawEvent, Schedule};
pub use layout::{
    horizontal_slot, lay_out_day, vertical_extent, vertical_offset, EventBlock, Slot,
};
pub use select::{events_for_day, events_for_week, DateRange};
