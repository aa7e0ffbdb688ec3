//! Article Browser Component
//!
//! Loads catalog pages behind an artificial delay, with search over the
//! loaded page, pagination, refresh and an error card with retry.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Button, ButtonSize, ButtonVariant, Card, CardVariant};
use crate::context::use_app_context;
use crate::dom;
use crate::feed::{fetch_page, ArticleFeed};
use crate::models::Article;

const WARNING_PATH: &str = "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-2.5L13.732 4c-.77-.833-1.964-.833-2.732 0L3.732 16.5c-.77.833.192 2.5 1.732 2.5z";
const SEARCH_PATH: &str = "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z";

#[component]
pub fn ApiData(#[prop(optional, into)] class: String) -> impl IntoView {
    let config = use_app_context().config();
    let page_size = config.page_size;
    let delay_ms = config.fetch_delay_ms;
    let max_buttons = config.max_page_buttons;

    let feed = RwSignal::new(ArticleFeed::new());

    // Fetch whatever page the feed currently points at
    let load = move || {
        let Some(ticket) = feed.try_update(|f| f.begin_fetch()) else {
            return;
        };
        log::debug!("[FEED] loading page {} (generation {})", ticket.page, ticket.generation);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let result = fetch_page(ticket.page, page_size);
            feed.update(|f| {
                f.finish_fetch(ticket, result);
            });
        });
    };

    // Initial load, once mounted
    Effect::new(move |_| load());

    // Scroll up and refetch when `step` moved the feed to another page
    let turn_page = move |step: &dyn Fn(&mut ArticleFeed) -> bool| {
        if feed.try_update(|f| step(f)).unwrap_or(false) {
            dom::scroll_to_top();
            load();
        }
    };

    let loading = Memo::new(move |_| feed.with(|f| f.loading()));
    let error = Memo::new(move |_| feed.with(|f| f.error().map(str::to_string)));
    let visible = Memo::new(move |_| feed.with(|f| f.visible_articles()));

    view! {
        <div class=format!("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 {}", class)>
            <div class="mb-8">
                <h2 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">
                    "Tech Articles & Tutorials"
                </h2>
                <p class="text-gray-600 dark:text-gray-400 mb-6">
                    "Data loading with loading states, error handling, search and pagination "
                    "over a collection of articles about web development."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 mb-6">
                    <div class="flex-1">
                        <input
                            type="text"
                            placeholder="Search articles by title or content..."
                            class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 dark:bg-gray-700 dark:text-white"
                            prop:value=move || feed.with(|f| f.search_term().to_string())
                            on:input=move |ev| feed.update(|f| f.set_search_term(event_target_value(&ev)))
                        />
                    </div>
                    <Button
                        class="whitespace-nowrap"
                        disabled=Signal::derive(move || loading.get())
                        on_click=Callback::new(move |_: ()| load())
                    >
                        {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                    </Button>
                </div>

                <Show when=move || loading.get()>
                    <div class="flex justify-center items-center py-12">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
                        <span class="ml-3 text-gray-600 dark:text-gray-400">"Loading articles..."</span>
                    </div>
                </Show>

                {move || error.get().map(|message| view! {
                    <Card variant=CardVariant::Outlined class="mb-6 border-red-200 dark:border-red-800">
                        <div class="text-center py-8">
                            <div class="text-red-600 dark:text-red-400 mb-4">
                                <svg class="w-16 h-16 mx-auto" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=WARNING_PATH />
                                </svg>
                            </div>
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">
                                "Error Loading Data"
                            </h3>
                            <p class="text-gray-600 dark:text-gray-400 mb-4">{message}</p>
                            <Button on_click=Callback::new(move |_: ()| load())>"Try Again"</Button>
                        </div>
                    </Card>
                })}

                <Show when=move || !loading.get() && error.get().is_none()>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
                        <For
                            each=move || visible.get()
                            key=|article| article.id
                            children=move |article| view! { <ArticleCard article=article /> }
                        />
                    </div>

                    <Show when=move || feed.with(|f| f.no_results())>
                        <Card variant=CardVariant::Outlined class="text-center py-8">
                            <div class="text-gray-500 dark:text-gray-400">
                                <svg class="w-16 h-16 mx-auto mb-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=SEARCH_PATH />
                                </svg>
                                <p>
                                    "No articles found matching \""
                                    {move || feed.with(|f| f.search_term().to_string())}
                                    "\""
                                </p>
                            </div>
                        </Card>
                    </Show>

                    <Show when=move || feed.with(|f| f.show_pagination())>
                        <div class="flex justify-center items-center space-x-2">
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                disabled=Signal::derive(move || !feed.with(|f| f.has_previous()))
                                on_click=Callback::new(move |_: ()| turn_page(&ArticleFeed::previous_page))
                            >
                                "Previous"
                            </Button>

                            <div class="flex space-x-1">
                                {move || feed.with(|f| f.page_buttons(max_buttons)).into_iter().map(|page| {
                                    let is_current = feed.with(|f| f.current_page()) == page;
                                    view! {
                                        <Button
                                            variant=if is_current { ButtonVariant::Primary } else { ButtonVariant::Secondary }
                                            size=ButtonSize::Sm
                                            class="w-10"
                                            on_click=Callback::new(move |_: ()| turn_page(&move |f: &mut ArticleFeed| f.go_to_page(page)))
                                        >
                                            {page}
                                        </Button>
                                    }
                                }).collect_view()}
                            </div>

                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                disabled=Signal::derive(move || !feed.with(|f| f.has_next()))
                                on_click=Callback::new(move |_: ()| turn_page(&ArticleFeed::next_page))
                            >
                                "Next"
                            </Button>
                        </div>
                    </Show>

                    <div class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                        <p>{move || feed.with(|f| f.summary())}</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ArticleCard(article: Article) -> impl IntoView {
    view! {
        <Card variant=CardVariant::Elevated hover=true class="hover:shadow-xl">
            <div class="h-full flex flex-col">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-3 line-clamp-2">
                    {article.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-400 text-sm flex-grow line-clamp-4">
                    {article.body}
                </p>
                <div class="mt-4 pt-4 border-t border-gray-200 dark:border-gray-700">
                    <div class="flex justify-between items-center text-xs text-gray-500 dark:text-gray-400">
                        <span>"Post ID: " {article.id}</span>
                        <span>"User ID: " {article.user_id}</span>
                    </div>
                </div>
            </div>
        </Card>
    }
}
