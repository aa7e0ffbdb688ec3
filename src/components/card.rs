//! Card Component
//!
//! Boxed content container.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

pub fn card_classes(variant: CardVariant, padding: CardPadding, hover: bool, extra: &str) -> String {
    let variant = match variant {
        CardVariant::Default => {
            "bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700"
        }
        CardVariant::Outlined => "bg-transparent border-2 border-gray-300 dark:border-gray-600",
        CardVariant::Elevated => {
            "bg-white dark:bg-gray-800 shadow-lg border border-gray-200 dark:border-gray-700"
        }
    };
    let padding = match padding {
        CardPadding::None => "",
        CardPadding::Sm => "p-3",
        CardPadding::Md => "p-6",
        CardPadding::Lg => "p-8",
    };
    let hover = if hover {
        "hover:shadow-md hover:scale-[1.02] cursor-pointer"
    } else {
        ""
    };
    ["rounded-lg transition-all duration-200", variant, padding, hover, extra.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] hover: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_classes(variant, padding, hover, &class)>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card() {
        let classes = card_classes(CardVariant::default(), CardPadding::default(), false, "");
        assert_eq!(
            classes,
            "rounded-lg transition-all duration-200 bg-white dark:bg-gray-800 shadow-sm \
             border border-gray-200 dark:border-gray-700 p-6"
        );
    }

    #[test]
    fn test_no_padding_leaves_no_gap() {
        let classes = card_classes(CardVariant::Outlined, CardPadding::None, true, "text-center");
        assert!(!classes.contains("  "));
        assert!(classes.contains("border-2"));
        assert!(classes.contains("hover:scale-[1.02]"));
        assert!(classes.ends_with("text-center"));
    }
}
