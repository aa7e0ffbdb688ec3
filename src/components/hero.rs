//! Hero Section
//!
//! Landing headline, calls to action and the feature grid.

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, Card, CardVariant};
use crate::dom;

struct Feature {
    title: &'static str,
    blurb: &'static str,
    icon_class: &'static str,
    badge_class: &'static str,
    icon_path: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Task Management",
        blurb: "Add, complete, and delete tasks with local storage persistence and filtering options.",
        icon_class: "w-6 h-6 text-blue-600 dark:text-blue-400",
        badge_class: "bg-blue-100 dark:bg-blue-900",
        icon_path: "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
    },
    Feature {
        title: "Data Loading",
        blurb: "Browse articles with simulated loading states, error handling, search and pagination.",
        icon_class: "w-6 h-6 text-green-600 dark:text-green-400",
        badge_class: "bg-green-100 dark:bg-green-900",
        icon_path: "M4 7v10c0 2.21 3.582 4 8 4s8-1.79 8-4V7M4 7c0 2.21 3.582 4 8 4s8-1.79 8-4M4 7c0-2.21 3.582-4 8-4s8 1.79 8 4",
    },
    Feature {
        title: "Responsive Design",
        blurb: "Layouts that adapt to every screen size, with a dark mode that follows you across visits.",
        icon_class: "w-6 h-6 text-purple-600 dark:text-purple-400",
        badge_class: "bg-purple-100 dark:bg-purple-900",
        icon_path: "M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zM21 5a2 2 0 00-2-2h-4a2 2 0 00-2 2v12a4 4 0 004 4h4a2 2 0 002-2V5z",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="py-16 bg-gradient-to-br from-blue-50 to-indigo-100 dark:from-gray-900 dark:to-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 dark:text-white mb-6">
                        "Showcase"
                    </h1>
                    <p class="text-xl text-gray-600 dark:text-gray-300 mb-8 max-w-3xl mx-auto">
                        "A single-page application demonstrating component architecture, reactive state, "
                        "browser persistence and asynchronous loading, styled with Tailwind CSS."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button
                            size=ButtonSize::Lg
                            class="px-8 py-3"
                            on_click=Callback::new(|_: ()| dom::scroll_to_section("tasks"))
                        >
                            "Try Task Manager"
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Lg
                            class="px-8 py-3"
                            on_click=Callback::new(|_: ()| dom::scroll_to_section("api"))
                        >
                            "View Articles"
                        </Button>
                    </div>
                </div>

                <div class="mt-16 grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|feature| view! {
                        <Card variant=CardVariant::Elevated class="text-center">
                            <div class=format!(
                                "w-12 h-12 {} rounded-lg flex items-center justify-center mx-auto mb-4",
                                feature.badge_class
                            )>
                                <svg class=feature.icon_class fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d=feature.icon_path
                                    />
                                </svg>
                            </div>
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">
                                {feature.title}
                            </h3>
                            <p class="text-gray-600 dark:text-gray-400 text-sm">{feature.blurb}</p>
                        </Card>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
