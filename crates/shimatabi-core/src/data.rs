//! Literal site content.
//!
//! The whole site is informational; everything here is constructed once and
//! rendered read-only, except the six-day plan which seeds the
//! [`ItineraryStore`](crate::store::ItineraryStore).

use serde::{Deserialize, Serialize};

use crate::itinerary::DayRecord;

/// An island featured in the art-festival gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Island {
    /// Island name.
    pub name: String,

    /// One-line description.
    pub description: String,

    /// Main sights, most important first.
    pub highlights: Vec<String>,

    /// Image path relative to the site root.
    pub image: String,

    /// Representative artworks.
    pub artworks: Vec<String>,

    /// Official festival page for the island.
    pub official_link: String,
}

impl Island {
    /// Create a new island record.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        highlights: Vec<String>,
        image: impl Into<String>,
        artworks: Vec<String>,
        official_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            highlights,
            image: image.into(),
            artworks,
            official_link: official_link.into(),
        }
    }
}

/// A trip highlight shown on the itinerary page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Sprite id of the icon.
    pub icon: String,

    /// Card title.
    pub title: String,

    /// Card body text.
    pub description: String,

    /// External link for details.
    pub link: String,
}

impl Highlight {
    /// Create a new highlight.
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
            link: link.into(),
        }
    }
}

/// One of the three festival seasons shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalSeason {
    /// Stable slug used for styling ("spring", "summer", "autumn").
    pub slug: String,

    /// Season name.
    pub name: String,

    /// Date range.
    pub dates: String,

    /// Duration and mood note.
    pub note: String,
}

impl FestivalSeason {
    /// Create a new season entry.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        dates: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            dates: dates.into(),
            note: note.into(),
        }
    }
}

/// The six-day island-hopping plan, in travel order.
pub fn six_day_plan() -> Vec<DayRecord> {
    vec![
        DayRecord::new(
            "D1",
            "关西机场 → 宇野港",
            "入境 • 租车 • 适应时差",
            "宇野港住宿",
            "租车自驾",
        ),
        DayRecord::new(
            "D2",
            "宇野港 → 丰岛（当日往返）",
            "丰岛美术馆 • 心脏音档案馆 • 横尾馆 • 丰岛环岛",
            "宇野港住宿",
            "轮渡往返",
        ),
        DayRecord::new(
            "D3",
            "宇野港 → 直岛（当日往返）",
            "地中美术馆 • 李禹焕美术馆 • 本村地区 • 黄南瓜",
            "宇野港住宿",
            "轮渡往返",
        ),
        DayRecord::new(
            "D4",
            "宇野港 → 小豆岛（汽车渡轮）",
            "驾车渡轮 • 寒霞溪 • 天使之路 • 橄榄公园",
            "小豆岛住宿",
            "汽车渡轮",
        ),
        DayRecord::new(
            "D5",
            "小豆岛 → 高松",
            "二十四只眼睛电影村 • 酱油工房",
            "高松住宿",
            "汽车渡轮",
        ),
        DayRecord::new(
            "D6",
            "高松 → 关西机场",
            "栗林公园 • 高松购物 • 返程",
            "",
            "自驾返程",
        ),
    ]
}

/// The three trip highlights on the itinerary page.
pub fn itinerary_highlights() -> Vec<Highlight> {
    vec![
        Highlight::new(
            "palette",
            "世界级艺术馆体验",
            "购买艺术祭通票，畅游地中美术馆、李禹焕美术馆、丰岛美术馆等顶级艺术空间",
            "https://setouchi-artfest.jp/tw/buy/passport/",
        ),
        Highlight::new(
            "camera",
            "秋日绝美自然风光",
            "查看各岛交通攻略，欣赏小豆岛寒霞溪红叶、天使之路、濑户内海多岛美景",
            "https://setouchi-artfest.jp/tw/access/island/",
        ),
        Highlight::new(
            "ship",
            "自驾汽渡独特体验",
            "直岛租借自行车，驾车登上渡轮前往小豆岛，畅游岛屿，感受海上体验",
            "https://ougiya-naoshima.jp/english/rental.html",
        ),
    ]
}

/// The six festival islands, in gallery order.
pub fn festival_islands() -> Vec<Island> {
    vec![
        Island::new(
            "直岛",
            "现代艺术圣地，以草间弥生和安藤忠雄的作品闻名",
            vec![
                "地中美术馆".into(),
                "李禹焕美术馆".into(),
                "黄南瓜".into(),
                "本村地区".into(),
            ],
            "naoshima.jpg",
            vec![
                "草间弥生黄南瓜".into(),
                "莫奈睡莲".into(),
                "安藤忠雄建筑".into(),
            ],
            "https://setouchi-artfest.jp/tw/place/naoshima/",
        ),
        Island::new(
            "丰岛",
            "自然与艺术和谐共生的岛屿，以丰岛美术馆著称",
            vec![
                "丰岛美术馆".into(),
                "心脏音档案馆".into(),
                "横尾馆".into(),
                "艺术家之家".into(),
            ],
            "teshima.jpg",
            vec![
                "内藤礼泉水作品".into(),
                "Christian Boltanski心跳".into(),
                "横尾忠则作品".into(),
            ],
            "https://setouchi-artfest.jp/tw/place/teshima/",
        ),
        Island::new(
            "小豆岛",
            "濑户内海第二大岛，融合自然美景与现代艺术",
            vec![
                "寒霞溪".into(),
                "天使之路".into(),
                "橄榄公园".into(),
                "二十四只眼睛电影村".into(),
            ],
            "shodoshima.jpg",
            vec![
                "太阳的贈り物".into(),
                "小豆岛之光".into(),
                "橄榄艺术装置".into(),
            ],
            "https://setouchi-artfest.jp/tw/place/shodoshima/",
        ),
        Island::new(
            "犬岛",
            "工业遗产与现代艺术完美结合的小岛",
            vec![
                "犬岛精炼所美术馆".into(),
                "犬岛家计划".into(),
                "石职人之里".into(),
            ],
            "inujima.jpg",
            vec![
                "三島由紀夫作品展".into(),
                "柳幸典装置".into(),
                "工业遗产艺术".into(),
            ],
            "https://setouchi-artfest.jp/tw/place/inujima/",
        ),
        Island::new(
            "女木岛",
            "传说中鬼岛，充满神秘色彩和互动艺术",
            vec![
                "鬼岛大洞窟".into(),
                "海鸥停车场".into(),
                "女木岛名画座".into(),
            ],
            "megijima.jpg",
            vec![
                "木村崇人海鸥作品".into(),
                "大竹伸朗女根".into(),
                "互动艺术装置".into(),
            ],
            "https://setouchi-artfest.jp/tw/place/megijima/",
        ),
        Island::new(
            "男木岛",
            "传统建筑与现代艺术融合的美丽岛屿",
            vec![
                "男木岛图书馆".into(),
                "步行路径艺术".into(),
                "传统石墙街道".into(),
            ],
            "ogijima.jpg",
            vec![
                "马克·迪翁图书馆".into(),
                "屋顶艺术装置".into(),
                "步行路径作品".into(),
            ],
            "https://setouchi-artfest.jp/tw/place/ogijima/",
        ),
    ]
}

/// The three 2025 festival seasons.
pub fn festival_seasons() -> Vec<FestivalSeason> {
    vec![
        FestivalSeason::new("spring", "春会期", "4月18日 - 5月25日", "38日间 • 樱花季节"),
        FestivalSeason::new("summer", "夏会期", "8月1日 - 8月31日", "31日间 • 海岛夏日"),
        FestivalSeason::new("autumn", "秋会期", "10月3日 - 11月9日", "38日间 • 红叶时节"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::TransportKind;

    #[test]
    fn test_six_day_plan_shape() {
        let plan = six_day_plan();
        assert_eq!(plan.len(), 6);

        let ids: Vec<&str> = plan.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(ids, ["D1", "D2", "D3", "D4", "D5", "D6"]);

        // Every day in the plan accepts edits.
        assert!(plan.iter().all(|d| d.is_editable));

        // Only the last day has no lodging.
        assert!(plan[..5].iter().all(|d| !d.accommodation.is_empty()));
        assert!(plan[5].accommodation.is_empty());
    }

    #[test]
    fn test_plan_transport_classification() {
        let kinds: Vec<TransportKind> =
            six_day_plan().iter().map(DayRecord::transport_kind).collect();
        assert_eq!(
            kinds,
            [
                TransportKind::SelfDrive,
                TransportKind::PassengerFerry,
                TransportKind::PassengerFerry,
                TransportKind::CarFerry,
                TransportKind::CarFerry,
                TransportKind::SelfDrive,
            ]
        );
    }

    #[test]
    fn test_festival_islands_shape() {
        let islands = festival_islands();
        assert_eq!(islands.len(), 6);
        assert_eq!(islands[0].name, "直岛");
        for island in &islands {
            assert!(!island.highlights.is_empty());
            assert!(!island.artworks.is_empty());
            assert!(island.official_link.starts_with("https://"));
        }
    }

    #[test]
    fn test_highlights_and_seasons() {
        assert_eq!(itinerary_highlights().len(), 3);

        let seasons = festival_seasons();
        assert_eq!(seasons.len(), 3);
        let slugs: Vec<&str> = seasons.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["spring", "summer", "autumn"]);
    }
}
