//! Layout Component
//!
//! Page shell: navbar, main content and footer. Keeps the document's
//! `dark` class in sync with the shared theme flag.

use leptos::prelude::*;

use crate::components::{Footer, Navbar};
use crate::context::use_app_context;
use crate::dom;

#[component]
pub fn Layout(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        dom::apply_theme_class(ctx.is_dark_mode());
    });

    view! {
        <div class=format!("min-h-screen bg-gray-50 dark:bg-gray-900 transition-colors {}", class)>
            <Navbar />
            <main class="flex-1">{children()}</main>
            <Footer />
        </div>
    }
}
