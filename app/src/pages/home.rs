//! Landing page: hero cover with navigation into the other two pages.

use leptos::prelude::*;
use leptos_meta::Title;
use shimatabi_core::data::festival_seasons;
use shimatabi_ui::{Button, ButtonVariant, Icon};

use crate::nav::open_external;

/// Festival official site.
const OFFICIAL_SITE: &str = "https://setouchi-artfest.jp/tw/";

/// Landing page.
#[component]
pub fn Home() -> impl IntoView {
    let seasons = festival_seasons();

    view! {
      <Title text="濑户内海艺术祭六日跳岛游" />

      <div class="shimatabi-page shimatabi-page-home">
        // Hero cover
        <section class="shimatabi-hero">
          <div class="shimatabi-hero-backdrop">
            <img src="/home-hero.jpg" alt="濑户内海艺术祭" />
            <div class="shimatabi-hero-overlay"></div>
          </div>

          <div class="shimatabi-hero-body">
            <h1 class="shimatabi-hero-title">
              "濑户内海"
              <span class="shimatabi-hero-accent">"艺术祭"</span>
              <span class="shimatabi-hero-subtitle">"六日跳岛游"</span>
            </h1>
            <p class="shimatabi-hero-lead">
              "以宇野港为基地，探索世界级现代艺术与濑户内海绝美自然的完美融合"
            </p>

            <div class="shimatabi-hero-actions">
              <a href="/itinerary" class="shimatabi-btn shimatabi-btn-cyan shimatabi-btn-lg">
                <Icon name="calendar" />
                "查看详细行程"
              </a>
              <a href="/art-festival" class="shimatabi-btn shimatabi-btn-orange shimatabi-btn-lg">
                <Icon name="palette" />
                "关于艺术祭"
              </a>
            </div>
          </div>
        </section>

        // Quick info cards
        <section class="shimatabi-quick-info">
          <div class="shimatabi-quick-info-grid">
            <div class="shimatabi-info-card">
              <div class="shimatabi-info-figure shimatabi-tone-blue">"6天"</div>
              <p>"精心规划的跳岛行程"</p>
            </div>
            <div class="shimatabi-info-card">
              <div class="shimatabi-info-figure shimatabi-tone-green">"6座岛"</div>
              <p>"直岛、丰岛、小豆岛等"</p>
            </div>
            <div class="shimatabi-info-card">
              <div class="shimatabi-info-figure shimatabi-tone-orange">"艺术祭"</div>
              <p>"2025年三季举办"</p>
            </div>
          </div>
        </section>

        // Festival seasons
        <section class="shimatabi-seasons">
          <h2>"瀬戸内国际芸術祭2025"</h2>
          <p class="shimatabi-seasons-lead">"三年一度的现代艺术盛典，分春夏秋三季举办"</p>

          <div class="shimatabi-seasons-grid">
            {seasons
              .into_iter()
              .map(|season| {
                view! {
                  <div class=format!("shimatabi-season shimatabi-season-{}", season.slug)>
                    <h3>{season.name}</h3>
                    <p class="shimatabi-season-dates">{season.dates}</p>
                    <p class="shimatabi-season-note">{season.note}</p>
                  </div>
                }
              })
              .collect_view()}
          </div>
        </section>

        // Official site link
        <section class="shimatabi-official">
          <div class="shimatabi-official-divider">
            <span></span>
            "更多信息"
            <span></span>
          </div>
          <Button
            variant=ButtonVariant::Outline
            on_click=Callback::new(move |_| open_external(OFFICIAL_SITE))
          >
            <Icon name="external-link" />
            "访问濑户内海艺术祭官方网站"
          </Button>
          <p class="shimatabi-official-note">"获取最新展览信息、交通指南和购票详情"</p>
        </section>
      </div>
    }
}
