//! Icon component backed by an SVG sprite.
//!
//! Icons are `<use>` references into `/icons.svg`, which the build copies
//! through to the site root. Unknown ids render an empty glyph; there is no
//! failure path.

use leptos::prelude::*;

/// Size of an [`Icon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    /// Inline with small text (badges, list rows).
    Xs,
    /// Inline with buttons and labels.
    #[default]
    Sm,
    /// Hero and section headers.
    Md,
}

impl IconSize {
    /// CSS class for this size.
    pub fn class(self) -> &'static str {
        match self {
            IconSize::Xs => "shimatabi-icon-xs",
            IconSize::Sm => "shimatabi-icon-sm",
            IconSize::Md => "shimatabi-icon-md",
        }
    }
}

/// Inline SVG icon referencing a sprite symbol by id.
#[component]
pub fn Icon(
    /// Sprite symbol id, e.g. "ship" or "external-link".
    #[prop(into)]
    name: String,
    /// Icon size.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Extra classes appended to the svg element.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let href = format!("/icons.svg#{name}");

    view! {
      <svg class=format!("shimatabi-icon {} {class}", size.class()) aria-hidden="true">
        <use_ href=href></use_>
      </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(IconSize::Xs.class(), "shimatabi-icon-xs");
        assert_eq!(IconSize::Sm.class(), "shimatabi-icon-sm");
        assert_eq!(IconSize::Md.class(), "shimatabi-icon-md");
    }

    #[test]
    fn test_default_size() {
        assert_eq!(IconSize::default(), IconSize::Sm);
    }
}
