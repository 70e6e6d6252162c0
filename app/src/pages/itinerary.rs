//! Six-day itinerary page with in-memory edit state.
//!
//! Owns the single [`ItineraryStore`] instance for the mounted view. The
//! store lives in a signal; every mutation goes through its two entry
//! points and is discarded when the page unmounts.

use leptos::prelude::*;
use leptos_meta::Title;
use shimatabi_core::{
    data::{itinerary_highlights, six_day_plan},
    itinerary::DayRecord,
    store::ItineraryStore,
};
use shimatabi_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Icon, IconSize,
};

use crate::nav::open_external;

const PASSPORT_LINK: &str = "https://setouchi-artfest.jp/tw/buy/passport/";
const ACCESS_LINK: &str = "https://setouchi-artfest.jp/tw/access/island/";
const OFFICIAL_SITE: &str = "https://setouchi-artfest.jp/tw/";

/// Ferry legs shown in the transportation guide.
const FERRY_LEGS: [(&str, &str); 4] = [
    ("宇野 ↔ 直岛", "约20分钟 | 人员渡轮"),
    ("宇野 ↔ 丰岛", "约60分钟 | 人员渡轮"),
    ("宇野 ↔ 小豆岛", "约60分钟 | 汽车渡轮"),
    ("小豆岛 ↔ 高松", "约60分钟 | 汽车渡轮"),
];

/// Lodging suggestions shown in the transportation guide.
const LODGING_TIPS: [(&str, &str); 3] = [
    ("宇野港", "住宿基地 (D1-D3)"),
    ("小豆岛", "温泉旅馆 (D4)"),
    ("高松", "JR站附近 (D5)"),
];

/// Itinerary page.
#[component]
pub fn Itinerary() -> impl IntoView {
    let store = RwSignal::new(ItineraryStore::new(six_day_plan()));
    let edit_mode = Memo::new(move |_| store.with(|s| s.edit_mode()));
    let toggle = Callback::new(move |_| store.update(|s| s.toggle_edit_mode()));

    let highlights = itinerary_highlights();

    view! {
      <Title text="六日跳岛游详细行程" />

      <div class="shimatabi-page shimatabi-page-itinerary">
        // Top bar with back navigation and the edit-mode toggle
        <header class="shimatabi-topbar">
          <div class="shimatabi-topbar-inner">
            <div class="shimatabi-topbar-left">
              <a href="/" class="shimatabi-btn shimatabi-btn-ghost shimatabi-btn-md shimatabi-back">
                <Icon name="arrow-left" />
                "返回首页"
              </a>
              <h1>"六日跳岛游详细行程"</h1>
            </div>

            <Show
              when=move || edit_mode.get()
              fallback=move || {
                view! {
                  <Button variant=ButtonVariant::Outline on_click=toggle>
                    <Icon name="edit" />
                    "编辑行程"
                  </Button>
                }
              }
            >
              <Button
                variant=ButtonVariant::Secondary
                class="shimatabi-btn-editing"
                on_click=toggle
              >
                <Icon name="edit" />
                "完成编辑"
              </Button>
            </Show>
          </div>
        </header>

        <div class="shimatabi-page-body">
          // Day-by-day timeline
          <section class="shimatabi-timeline">
            <h2>"精心策划的六日行程"</h2>

            <div class="shimatabi-timeline-list">
              {six_day_plan()
                .into_iter()
                .enumerate()
                .map(|(index, day)| {
                  view! { <DayCard store=store index=index day=day edit_mode=edit_mode /> }
                })
                .collect_view()}
            </div>
          </section>

          // Trip highlights
          <section class="shimatabi-highlights">
            <h3>"行程亮点"</h3>
            <div class="shimatabi-highlights-grid">
              {highlights
                .into_iter()
                .map(|highlight| {
                  let link = highlight.link.clone();
                  view! {
                    <Card class="shimatabi-highlight">
                      <CardHeader>
                        <div class="shimatabi-highlight-icon">
                          <Icon name=highlight.icon.clone() size=IconSize::Md />
                        </div>
                        <CardTitle>{highlight.title.clone()}</CardTitle>
                      </CardHeader>
                      <CardContent>
                        <CardDescription>{highlight.description.clone()}</CardDescription>
                        <Button
                          variant=ButtonVariant::Outline
                          size=ButtonSize::Sm
                          on_click=Callback::new(move |_| open_external(&link))
                        >
                          <Icon name="external-link" />
                          "了解详情"
                        </Button>
                      </CardContent>
                    </Card>
                  }
                })
                .collect_view()}
            </div>
          </section>

          // Transportation guide
          <Card class="shimatabi-transport-guide">
            <CardHeader>
              <CardTitle class="shimatabi-guide-title">
                <Icon name="ship" />
                "交通连接指南"
              </CardTitle>
            </CardHeader>
            <CardContent>
              <div class="shimatabi-guide-grid">
                <div>
                  <h4 class="shimatabi-tone-blue">"轮渡时刻"</h4>
                  <div class="shimatabi-guide-rows">
                    {FERRY_LEGS
                      .iter()
                      .map(|(leg, detail)| {
                        view! {
                          <div class="shimatabi-guide-row">
                            <span>{*leg}</span>
                            <span class="shimatabi-guide-detail">{*detail}</span>
                          </div>
                        }
                      })
                      .collect_view()}
                  </div>
                </div>

                <div>
                  <h4 class="shimatabi-tone-green">"住宿建议"</h4>
                  <div class="shimatabi-guide-rows">
                    {LODGING_TIPS
                      .iter()
                      .map(|(place, note)| {
                        view! {
                          <div class="shimatabi-guide-row">
                            <strong>{*place} ": "</strong>
                            <span>{*note}</span>
                          </div>
                        }
                      })
                      .collect_view()}
                    <p class="shimatabi-guide-warning">"⚠️ 艺术祭期间住宿紧俏，建议提前预订"</p>
                  </div>
                </div>
              </div>

              <div class="shimatabi-guide-links">
                <Button
                  variant=ButtonVariant::Outline
                  on_click=Callback::new(move |_| open_external(PASSPORT_LINK))
                >
                  <Icon name="external-link" />
                  "购买艺术祭通票"
                </Button>
                <Button
                  variant=ButtonVariant::Outline
                  on_click=Callback::new(move |_| open_external(ACCESS_LINK))
                >
                  <Icon name="external-link" />
                  "查看详细交通"
                </Button>
                <Button
                  variant=ButtonVariant::Outline
                  on_click=Callback::new(move |_| open_external(OFFICIAL_SITE))
                >
                  <Icon name="external-link" />
                  "官方网站"
                </Button>
              </div>
            </CardContent>
          </Card>
        </div>
      </div>
    }
}

/// One day card in the timeline.
///
/// Static fields come from the seed record; only the activity text is read
/// reactively, so an edit re-renders just that row's body.
#[component]
fn DayCard(
    /// Shared store for the mounted page.
    store: RwSignal<ItineraryStore>,
    /// Position of this record in the sequence.
    index: usize,
    /// Seed record for the static fields.
    day: DayRecord,
    /// Global edit-mode flag.
    edit_mode: Memo<bool>,
) -> impl IntoView {
    let activities = Memo::new(move |_| {
        store.with(|s| {
            s.days()
                .get(index)
                .map(|d| d.activities.clone())
                .unwrap_or_default()
        })
    });

    let editable = day.is_editable;
    let editing = Memo::new(move |_| edit_mode.get() && editable);
    let transport_icon = day.transport_kind().icon_id();

    let lodging = (!day.accommodation.is_empty()).then(|| {
        let accommodation = day.accommodation.clone();
        view! {
          <Badge variant=BadgeVariant::Secondary class="shimatabi-day-lodging">
            <Icon name="map-pin" size=IconSize::Xs />
            {accommodation}
          </Badge>
        }
    });

    view! {
      <div class="shimatabi-day" class:editing=move || editing.get()>
        <Card>
          <CardHeader>
            <div class="shimatabi-day-header">
              <CardTitle class="shimatabi-day-title">
                <div class="shimatabi-day-number">{day.day.clone()}</div>
                <div>
                  <div class="shimatabi-day-route">{day.route.clone()}</div>
                  <div class="shimatabi-day-transport">
                    <Icon name=transport_icon size=IconSize::Xs />
                    {day.transport.clone()}
                  </div>
                </div>
              </CardTitle>
              {lodging}
            </div>
          </CardHeader>

          <CardContent>
            <Show
              when=move || editing.get()
              fallback=move || {
                view! { <p class="shimatabi-day-activities">{move || activities.get()}</p> }
              }
            >
              <textarea
                class="shimatabi-day-editor"
                rows=2
                placeholder="编辑当日活动安排..."
                prop:value=move || activities.get()
                on:input=move |ev| {
                  let value = event_target_value(&ev);
                  store.update(|s| {
                    s.update_activity(index, value);
                  });
                }
              ></textarea>
            </Show>
          </CardContent>
        </Card>
      </div>
    }
}
