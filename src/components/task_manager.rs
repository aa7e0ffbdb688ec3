//! Task Manager Component
//!
//! New-task form, filter bar and the filtered task list.

use leptos::prelude::*;

use crate::components::{Button, ConfirmButton, TaskRow};
use crate::context::use_app_context;
use crate::models::TaskFilter;
use crate::store::{task_stats, visible_tasks, AppStateStoreFields};

#[component]
pub fn TaskManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    let stats = Memo::new(move |_| task_stats(store));
    let tasks = Memo::new(move |_| visible_tasks(store));
    let has_completed = Memo::new(move |_| stats.get().completed > 0);

    view! {
        <div class="max-w-2xl mx-auto">
            <form class="flex gap-3 mb-6" on:submit=add_task>
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 dark:bg-gray-700 dark:text-white"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <Button submit=true>"Add"</Button>
            </form>

            <div class="flex flex-wrap items-center justify-between gap-3 mb-4">
                <div class="flex gap-2">
                    {TaskFilter::ALL.iter().map(|&filter| {
                        let is_active = move || store.filter().get() == filter;
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() {
                                    "px-3 py-1.5 text-sm rounded-lg bg-blue-600 text-white"
                                } else {
                                    "px-3 py-1.5 text-sm rounded-lg bg-gray-100 text-gray-700 hover:bg-gray-200 dark:bg-gray-700 dark:text-gray-200 dark:hover:bg-gray-600"
                                }
                                on:click=move |_| ctx.set_filter(filter)
                            >
                                {filter.label()} " (" {move || stats.get().count_for(filter)} ")"
                            </button>
                        }
                    }).collect_view()}
                </div>
                <span class="text-sm text-gray-500 dark:text-gray-400">
                    {move || stats.get().remaining_label()}
                </span>
            </div>

            <Show
                when=move || !tasks.get().is_empty()
                fallback=move || view! {
                    <p class="text-center py-8 text-gray-500 dark:text-gray-400">
                        {move || store.filter().get().empty_message()}
                    </p>
                }
            >
                <ul class="space-y-2">
                    <For
                        each=move || tasks.get()
                        key=|task| (task.id, task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>

            <Show when=move || has_completed.get()>
                <div class="mt-4 flex justify-end">
                    <ConfirmButton
                        label="Clear completed"
                        prompt="Remove all completed tasks?"
                        button_class="text-sm text-red-600 hover:text-red-700 dark:text-red-400"
                        on_confirm=Callback::new(move |_: ()| ctx.clear_completed())
                    />
                </div>
            </Show>
        </div>
    }
}
