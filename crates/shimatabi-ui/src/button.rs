//! Button component.

use leptos::{ev::MouseEvent, prelude::*};

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Solid accent background.
    #[default]
    Primary,
    /// Muted background.
    Secondary,
    /// Transparent with a border.
    Outline,
    /// No background or border.
    Ghost,
}

impl ButtonVariant {
    /// CSS class for this variant.
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "shimatabi-btn-primary",
            ButtonVariant::Secondary => "shimatabi-btn-secondary",
            ButtonVariant::Outline => "shimatabi-btn-outline",
            ButtonVariant::Ghost => "shimatabi-btn-ghost",
        }
    }
}

/// Size of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Compact.
    Sm,
    /// Regular.
    #[default]
    Md,
    /// Prominent, used for hero actions.
    Lg,
}

impl ButtonSize {
    /// CSS class for this size.
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "shimatabi-btn-sm",
            ButtonSize::Md => "shimatabi-btn-md",
            ButtonSize::Lg => "shimatabi-btn-lg",
        }
    }
}

/// Styled button with an optional click callback.
///
/// Navigation-style clicks are fire-and-forget; the callback has no error
/// path and no return value.
#[component]
pub fn Button(
    /// Visual style.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Extra classes appended to the button.
    #[prop(optional, into)]
    class: String,
    /// Click handler.
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "shimatabi-btn {} {} {class}",
        variant.class(),
        size.class()
    );

    view! {
      <button
        type="button"
        class=classes
        on:click=move |ev| {
          if let Some(cb) = on_click {
            cb.run(ev);
          }
        }
      >
        {children()}
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "shimatabi-btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "shimatabi-btn-secondary");
        assert_eq!(ButtonVariant::Outline.class(), "shimatabi-btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "shimatabi-btn-ghost");
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(ButtonSize::Sm.class(), "shimatabi-btn-sm");
        assert_eq!(ButtonSize::Md.class(), "shimatabi-btn-md");
        assert_eq!(ButtonSize::Lg.class(), "shimatabi-btn-lg");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }
}
