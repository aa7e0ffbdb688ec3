//! Footer Component
//!
//! Section links plus a collapsible view of the logger's recent lines.

use leptos::prelude::*;

use crate::components::navbar::NAV_LINKS;
use crate::components::{Button, ButtonSize, ButtonVariant};

#[component]
pub fn Footer() -> impl IntoView {
    let (log_open, set_log_open) = signal(false);
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());

    let refresh_log = move || set_log_lines.set(console_logger::recent_lines());

    let toggle_log = move |_: ()| {
        let open = !log_open.get_untracked();
        if open {
            refresh_log();
        }
        set_log_open.set(open);
    };

    let clear_log = move |_: ()| {
        console_logger::clear_lines();
        refresh_log();
    };

    view! {
        <footer class="bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Showcase \u{00B7} built with Leptos and Rust"
                    </p>
                    <div class="flex items-center space-x-6">
                        {NAV_LINKS.iter().map(|(href, label)| view! {
                            <a
                                href=*href
                                class="text-sm text-gray-500 hover:text-blue-600 dark:text-gray-400 dark:hover:text-blue-400"
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                        <a
                            href="#about"
                            class="text-sm text-gray-500 hover:text-blue-600 dark:text-gray-400 dark:hover:text-blue-400"
                        >
                            "About"
                        </a>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on_click=Callback::new(toggle_log)
                        >
                            {move || if log_open.get() { "Hide log" } else { "Show log" }}
                        </Button>
                    </div>
                </div>

                <Show when=move || log_open.get()>
                    <div class="mt-6 rounded-lg border border-gray-200 dark:border-gray-700">
                        <div class="flex justify-end gap-2 px-3 py-2 border-b border-gray-200 dark:border-gray-700">
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_: ()| refresh_log())
                            >
                                "Refresh"
                            </Button>
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                on_click=Callback::new(clear_log)
                            >
                                "Clear"
                            </Button>
                        </div>
                        <Show
                            when=move || !log_lines.get().is_empty()
                            fallback=|| view! {
                                <p class="px-3 py-2 text-xs text-gray-500 dark:text-gray-400">"No log lines yet"</p>
                            }
                        >
                            <pre class="max-h-64 overflow-y-auto px-3 py-2 text-xs text-gray-600 dark:text-gray-300">
                                {move || log_lines.get().join("\n")}
                            </pre>
                        </Show>
                    </div>
                </Show>
            </div>
        </footer>
    }
}
