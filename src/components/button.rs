//! Button Component
//!
//! Themed button with variant and size presets.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

const BASE: &str = "inline-flex items-center justify-center font-medium rounded-lg transition-colors \
focus:outline-none focus:ring-2 focus:ring-offset-2 dark:focus:ring-offset-gray-900 \
disabled:opacity-50 disabled:cursor-not-allowed";

/// Full class string for a button
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500",
        ButtonVariant::Secondary => {
            "bg-gray-100 text-gray-900 hover:bg-gray-200 focus:ring-gray-400 dark:bg-gray-700 dark:text-white dark:hover:bg-gray-600"
        }
        ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
        ButtonVariant::Ghost => {
            "bg-transparent text-gray-600 hover:bg-gray-100 focus:ring-gray-400 dark:text-gray-300 dark:hover:bg-gray-800"
        }
    };
    let size = match size {
        ButtonSize::Sm => "px-3 py-1.5 text-sm",
        ButtonSize::Md => "px-4 py-2 text-base",
        ButtonSize::Lg => "px-6 py-3 text-lg",
    };
    [BASE, variant, size, extra.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// Renders `type="submit"` instead of `type="button"`
    #[prop(optional)] submit: bool,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, &class);

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=classes
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
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
    fn test_variant_and_size() {
        let classes = button_classes(ButtonVariant::Danger, ButtonSize::Sm, "");
        assert!(classes.contains("bg-red-600"));
        assert!(classes.contains("px-3 py-1.5"));
        assert!(!classes.ends_with(' '));
    }

    #[test]
    fn test_extra_classes_appended() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default(), "  w-10 ");
        assert!(classes.starts_with("inline-flex"));
        assert!(classes.contains("bg-blue-600"));
        assert!(classes.ends_with("w-10"));
    }
}
