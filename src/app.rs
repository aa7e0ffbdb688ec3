//! Showcase App
//!
//! Main application component: hero, task manager, articles and about,
//! inside the shared layout.

use leptos::prelude::*;

use crate::components::{About, ApiData, Hero, Layout, TaskManager};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide stores and context to all children
    AppContext::provide(config);

    view! {
        <Layout>
            <Hero />

            <section id="tasks" class="py-16 bg-white dark:bg-gray-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">"Task Manager"</h2>
                        <p class="text-lg text-gray-600 dark:text-gray-400">
                            "Manage your tasks with ease. Add, complete, and organize your to-dos."
                        </p>
                    </div>
                    <TaskManager />
                </div>
            </section>

            <section id="api" class="py-16 bg-gray-50 dark:bg-gray-900">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">"Article Browser"</h2>
                        <p class="text-lg text-gray-600 dark:text-gray-400">
                            "Explore articles with search and pagination."
                        </p>
                    </div>
                    <ApiData />
                </div>
            </section>

            <About />
        </Layout>
    }
}
