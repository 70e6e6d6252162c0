//! Site pages.

pub mod art_festival;
pub mod home;
pub mod itinerary;

pub use art_festival::ArtFestival;
pub use home::Home;
pub use itinerary::Itinerary;
