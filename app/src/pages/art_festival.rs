//! Art-festival island gallery page.
//!
//! Pure rendering of the literal island records; the only interactions are
//! external-link opens and a history-back navigation.

use leptos::prelude::*;
use leptos_meta::Title;
use shimatabi_core::{data::festival_islands, Island};
use shimatabi_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Icon, IconSize,
};

use crate::nav::{history_back, open_external};

const PASSPORT_LINK: &str = "https://setouchi-artfest.jp/tw/buy/passport/";

/// Island gallery page.
#[component]
pub fn ArtFestival() -> impl IntoView {
    let islands = festival_islands();

    view! {
      <Title text="濑户内海艺术祭" />

      <div class="shimatabi-page shimatabi-page-festival">
        // Sticky top bar
        <header class="shimatabi-topbar shimatabi-topbar-sticky">
          <div class="shimatabi-topbar-inner">
            <Button
              variant=ButtonVariant::Ghost
              class="shimatabi-back"
              on_click=Callback::new(move |_| history_back())
            >
              <Icon name="arrow-left" />
              "返回主页"
            </Button>
            <h1>"濑户内海艺术祭"</h1>
            <div class="shimatabi-topbar-spacer"></div>
          </div>
        </header>

        <div class="shimatabi-page-body">
          <div class="shimatabi-festival-intro">
            <h1>"濑户内海艺术祭2025"</h1>
            <p>"探索现代艺术与自然美景完美融合的岛屿世界"</p>
            <div class="shimatabi-festival-dates">
              <Icon name="calendar" size=IconSize::Xs />
              <span>"春季：4/18-5/25 | 夏季：8/1-8/31 | 秋季：10/3-11/9"</span>
            </div>
          </div>

          // Island grid
          <div class="shimatabi-island-grid">
            {islands
              .into_iter()
              .map(|island| view! { <IslandCard island=island /> })
              .collect_view()}
          </div>

          // Visiting tips
          <Card class="shimatabi-tips">
            <CardContent>
              <h3>"参观提示"</h3>
              <div class="shimatabi-tips-grid">
                <div>
                  <strong>"购票建议："</strong>
                  <p>"建议购买艺术祭通票，可参观大部分展览作品"</p>
                </div>
                <div>
                  <strong>"交通安排："</strong>
                  <p>"提前查询轮渡时刻表，合理安排岛屿间的交通"</p>
                </div>
                <div>
                  <strong>"参观时间："</strong>
                  <p>"建议每个岛屿安排半天至一天的参观时间"</p>
                </div>
              </div>
              <div class="shimatabi-tips-action">
                <Button on_click=Callback::new(move |_| open_external(PASSPORT_LINK))>
                  "立即购买艺术祭通票"
                </Button>
              </div>
            </CardContent>
          </Card>
        </div>
      </div>
    }
}

/// One island card in the gallery grid.
#[component]
fn IslandCard(
    /// Island record to render.
    island: Island,
) -> impl IntoView {
    let link = island.official_link.clone();

    // First three sights as badges, the rest folded into an overflow badge.
    let shown_highlights = island.highlights.iter().take(3).cloned().collect::<Vec<_>>();
    let extra_highlights = island.highlights.len().saturating_sub(3);

    // First two artworks, the rest as an ellipsis line.
    let shown_artworks = island.artworks.iter().take(2).cloned().collect::<Vec<_>>();
    let has_more_artworks = island.artworks.len() > 2;

    let image = island.image.clone();
    let tag_name = island.name.clone();
    let title_name = island.name.clone();
    let alt_name = island.name.clone();
    let description = island.description.clone();

    view! {
      <Card class="shimatabi-island">
        <div
          class="shimatabi-island-cover"
          title="点击查看官方介绍"
          on:click=move |_| open_external(&link)
        >
          <img src=format!("/{}", image) alt=alt_name />
          <Badge variant=BadgeVariant::Secondary class="shimatabi-island-tag">
            {tag_name}
          </Badge>
        </div>

        <CardHeader>
          <CardTitle class="shimatabi-island-title">
            <Icon name="map-pin" size=IconSize::Xs />
            {title_name}
          </CardTitle>
          <CardDescription>{description}</CardDescription>
        </CardHeader>

        <CardContent>
          <div class="shimatabi-island-section">
            <h4>
              <Icon name="camera" size=IconSize::Xs />
              "主要景点"
            </h4>
            <div class="shimatabi-island-badges">
              {shown_highlights
                .into_iter()
                .map(|sight| {
                  view! { <Badge variant=BadgeVariant::Outline>{sight}</Badge> }
                })
                .collect_view()}
              {(extra_highlights > 0)
                .then(|| {
                  view! {
                    <Badge variant=BadgeVariant::Outline>{format!("+{extra_highlights}")}</Badge>
                  }
                })}
            </div>
          </div>

          <div class="shimatabi-island-section">
            <h4>
              <Icon name="palette" size=IconSize::Xs />
              "代表作品"
            </h4>
            <div class="shimatabi-island-artworks">
              {shown_artworks
                .into_iter()
                .map(|artwork| view! { <p>"• " {artwork}</p> })
                .collect_view()}
              {has_more_artworks.then(|| view! { <p class="shimatabi-muted">"• 更多作品..."</p> })}
            </div>
          </div>
        </CardContent>
      </Card>
    }
}
