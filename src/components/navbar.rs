//! Navbar Component
//!
//! Brand, section links, theme toggle and a collapsible mobile menu.

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::context::use_app_context;

/// Section anchors in display order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#tasks", "Tasks"),
    ("#api", "API Data"),
];

const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_PATH: &str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

#[component]
pub fn Navbar(#[prop(optional, into)] class: String) -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);

    let link_class = "text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 \
                      px-3 py-2 rounded-md text-sm font-medium transition-colors";
    let mobile_link_class = "text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 \
                             block px-3 py-2 rounded-md text-base font-medium";

    view! {
        <nav class=format!(
            "bg-white dark:bg-gray-900 shadow-sm border-b border-gray-200 dark:border-gray-700 {}",
            class
        )>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-bold text-gray-900 dark:text-white">"Showcase"</h1>
                    </div>

                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {NAV_LINKS.iter().map(|(href, label)| view! {
                                <a href=*href class=link_class>{*label}</a>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="flex items-center space-x-4">
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Sm
                            class="flex items-center space-x-2"
                            on_click=Callback::new(move |_: ()| ctx.toggle_theme())
                        >
                            // Offer the mode the user can switch to
                            {move || {
                                let (path, label) = if ctx.is_dark_mode() {
                                    (SUN_PATH, "Light")
                                } else {
                                    (MOON_PATH, "Dark")
                                };
                                view! {
                                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
                                    </svg>
                                    <span>{label}</span>
                                }
                            }}
                        </Button>

                        <div class="md:hidden">
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                class="p-2"
                                on_click=Callback::new(move |_: ()| set_menu_open.update(|open| *open = !*open))
                            >
                                <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                                </svg>
                            </Button>
                        </div>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden">
                        <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 border-t border-gray-200 dark:border-gray-700">
                            {NAV_LINKS.iter().map(|(href, label)| view! {
                                <a
                                    href=*href
                                    class=mobile_link_class
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }).collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
