//! Shimatabi Core Library
//!
//! Domain types, the itinerary state store, and configuration for the
//! Shimatabi travel site.

pub mod config;
pub mod data;
pub mod error;
pub mod itinerary;
pub mod store;

pub use config::Config;
pub use data::{FestivalSeason, Highlight, Island};
pub use error::{CoreError, Result};
pub use itinerary::{DayRecord, TransportKind};
pub use store::ItineraryStore;
