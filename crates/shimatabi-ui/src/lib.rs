//! Shimatabi UI Components
//!
//! Generic presentational Leptos components for the Shimatabi frontend.
//! None of these know anything about itineraries; pages compose them with
//! domain data from `shimatabi-core`.
//!
//! # Components
//!
//! ## Card
//! - [`Card`] - Container with border and shadow
//! - [`CardHeader`] / [`CardTitle`] / [`CardDescription`] / [`CardContent`]
//!
//! ## Controls
//! - [`Button`] - Variant- and size-styled button with optional click callback
//! - [`Badge`] - Small status/label pill
//!
//! ## Icons
//! - [`Icon`] - Inline SVG referencing a symbol in the `/icons.svg` sprite
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use shimatabi_ui::{Button, ButtonVariant, Card, CardContent, Icon};
//!
//! #[component]
//! fn Tip() -> impl IntoView {
//!     view! {
//!         <Card>
//!             <CardContent>
//!                 <Button variant=ButtonVariant::Outline>
//!                     <Icon name="external-link" />
//!                     "了解详情"
//!                 </Button>
//!             </CardContent>
//!         </Card>
//!     }
//! }
//! ```

pub mod badge;
pub mod button;
pub mod card;
pub mod icon;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use icon::{Icon, IconSize};
