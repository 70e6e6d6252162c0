//! Badge component.

use leptos::prelude::*;

/// Visual style of a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    /// Filled, muted background.
    #[default]
    Secondary,
    /// Transparent with a border.
    Outline,
}

impl BadgeVariant {
    /// CSS class for this variant.
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Secondary => "shimatabi-badge-secondary",
            BadgeVariant::Outline => "shimatabi-badge-outline",
        }
    }
}

/// Small label pill.
#[component]
pub fn Badge(
    /// Visual style.
    #[prop(default = BadgeVariant::Secondary)]
    variant: BadgeVariant,
    /// Extra classes appended to the badge.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
      <span class=format!("shimatabi-badge {} {class}", variant.class())>{children()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(BadgeVariant::Secondary.class(), "shimatabi-badge-secondary");
        assert_eq!(BadgeVariant::Outline.class(), "shimatabi-badge-outline");
    }

    #[test]
    fn test_default_variant() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Secondary);
    }
}
