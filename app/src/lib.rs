//! Shimatabi application root.
//!
//! Client-side routing over the three site pages. The dev server resolves
//! unknown paths to the root document, so the router needs no server-side
//! route table.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

pub mod nav;
pub mod pages;

use pages::{ArtFestival, Home, Itinerary};

/// Application root with the route table.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      <Title text="濑户内海艺术祭六日跳岛游" />

      <Router>
        <main>
          <Routes fallback=|| "页面不存在".into_view()>
            <Route path=StaticSegment("") view=Home />
            <Route path=StaticSegment("itinerary") view=Itinerary />
            <Route path=StaticSegment("art-festival") view=ArtFestival />
          </Routes>
        </main>
      </Router>
    }
}
