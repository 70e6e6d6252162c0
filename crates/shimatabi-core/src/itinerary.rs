//! Itinerary day records and transport classification.

use serde::{Deserialize, Serialize};

/// One day of the itinerary.
///
/// The sequence of records is fixed at construction; only [`activities`]
/// is ever replaced afterwards, via
/// [`ItineraryStore::update_activity`](crate::store::ItineraryStore::update_activity).
///
/// [`activities`]: DayRecord::activities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Short ordering identifier, unique within the sequence ("D1".."D6").
    pub day: String,

    /// Human-readable origin → destination description.
    pub route: String,

    /// Free-text activity description. The only mutable field.
    pub activities: String,

    /// Free-text lodging description; empty means no lodging that night.
    #[serde(default)]
    pub accommodation: String,

    /// Free-text transport mode descriptor, classified by [`TransportKind`].
    pub transport: String,

    /// When false the record renders read-only regardless of edit mode.
    #[serde(default)]
    pub is_editable: bool,
}

impl DayRecord {
    /// Create a new, editable day record.
    pub fn new(
        day: impl Into<String>,
        route: impl Into<String>,
        activities: impl Into<String>,
        accommodation: impl Into<String>,
        transport: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            route: route.into(),
            activities: activities.into(),
            accommodation: accommodation.into(),
            transport: transport.into(),
            is_editable: true,
        }
    }

    /// Set whether the record's activities can be edited.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.is_editable = editable;
        self
    }

    /// Classify this record's transport descriptor.
    pub fn transport_kind(&self) -> TransportKind {
        TransportKind::classify(&self.transport)
    }
}

/// Transport display category for a day record.
///
/// Exactly four categories exist; free-form transport text is reduced to
/// one of them by [`TransportKind::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportKind {
    /// Passenger ferry (轮渡).
    PassengerFerry,
    /// Rental-car self-drive (自驾).
    SelfDrive,
    /// Vehicle-carrying ferry (渡轮).
    CarFerry,
    /// Fallback category when no keyword matches.
    Rail,
}

/// Keyword table evaluated in order; the first matching substring wins.
///
/// The order is load-bearing: "汽车渡轮" contains "渡轮" but not "轮渡" and
/// must resolve to [`TransportKind::CarFerry`], while a descriptor containing
/// both "轮渡" and "自驾" resolves to [`TransportKind::PassengerFerry`].
const TRANSPORT_KEYWORDS: [(&str, TransportKind); 3] = [
    ("轮渡", TransportKind::PassengerFerry),
    ("自驾", TransportKind::SelfDrive),
    ("渡轮", TransportKind::CarFerry),
];

impl TransportKind {
    /// Classify a free-text transport descriptor.
    ///
    /// Pure and deterministic; unknown descriptors fall through to
    /// [`TransportKind::Rail`].
    pub fn classify(transport: &str) -> Self {
        TRANSPORT_KEYWORDS
            .iter()
            .find(|(keyword, _)| transport.contains(keyword))
            .map(|&(_, kind)| kind)
            .unwrap_or(TransportKind::Rail)
    }

    /// Sprite id of the icon representing this category.
    pub fn icon_id(self) -> &'static str {
        match self {
            TransportKind::PassengerFerry => "ship",
            TransportKind::SelfDrive => "car",
            TransportKind::CarFerry => "anchor",
            TransportKind::Rail => "train",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_record_creation() {
        let day = DayRecord::new("D1", "关西机场 → 宇野港", "入境 • 租车", "宇野港住宿", "租车自驾");
        assert_eq!(day.day, "D1");
        assert_eq!(day.route, "关西机场 → 宇野港");
        assert!(day.is_editable);
    }

    #[test]
    fn test_day_record_read_only() {
        let day = DayRecord::new("D0", "出发", "打包行李", "", "火车").with_editable(false);
        assert!(!day.is_editable);
    }

    #[test]
    fn test_classify_passenger_ferry() {
        assert_eq!(TransportKind::classify("轮渡往返"), TransportKind::PassengerFerry);
    }

    #[test]
    fn test_classify_self_drive() {
        assert_eq!(TransportKind::classify("租车自驾"), TransportKind::SelfDrive);
        assert_eq!(TransportKind::classify("自驾返程"), TransportKind::SelfDrive);
    }

    #[test]
    fn test_classify_car_ferry_priority() {
        // "汽车渡轮" matches the car-ferry keyword and nothing earlier.
        assert_eq!(TransportKind::classify("汽车渡轮"), TransportKind::CarFerry);
    }

    #[test]
    fn test_classify_first_keyword_wins() {
        // Contains both a passenger-ferry and a self-drive keyword; the
        // passenger-ferry keyword is checked first.
        assert_eq!(
            TransportKind::classify("自驾加轮渡"),
            TransportKind::PassengerFerry
        );
    }

    #[test]
    fn test_classify_fallback_is_rail() {
        assert_eq!(TransportKind::classify("JR特急"), TransportKind::Rail);
        assert_eq!(TransportKind::classify(""), TransportKind::Rail);
    }

    #[test]
    fn test_classify_deterministic() {
        for text in ["轮渡往返", "汽车渡轮", "自驾返程", "巴士"] {
            assert_eq!(TransportKind::classify(text), TransportKind::classify(text));
        }
    }

    #[test]
    fn test_icon_ids() {
        assert_eq!(TransportKind::PassengerFerry.icon_id(), "ship");
        assert_eq!(TransportKind::SelfDrive.icon_id(), "car");
        assert_eq!(TransportKind::CarFerry.icon_id(), "anchor");
        assert_eq!(TransportKind::Rail.icon_id(), "train");
    }

    #[test]
    fn test_day_record_serialization() {
        let day = DayRecord::new("D2", "宇野港 → 丰岛", "丰岛美术馆", "宇野港住宿", "轮渡往返");
        let json_like = toml::to_string(&day).unwrap();
        assert!(json_like.contains("D2"));
    }
}
