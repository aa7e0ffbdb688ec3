//! Task Row Component
//!
//! A single task in the list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id;
    let completed = task.completed;

    view! {
        <li class="flex items-center gap-3 px-4 py-3 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg">
            <input
                type="checkbox"
                class="h-5 w-5 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                prop:checked=completed
                on:change=move |_| ctx.toggle_task(id)
            />
            <span class=if completed {
                "flex-1 line-through text-gray-400 dark:text-gray-500"
            } else {
                "flex-1 text-gray-900 dark:text-white"
            }>
                {task.text}
            </span>
            <button
                type="button"
                class="text-gray-400 hover:text-red-600 dark:hover:text-red-400 text-xl leading-none"
                title="Delete task"
                on:click=move |_| ctx.delete_task(id)
            >
                "\u{00D7}"
            </button>
        </li>
    }
}
