//! About Section
//!
//! Static project description, authored in Markdown.

use leptos::prelude::*;

use crate::components::{Card, CardPadding, CardVariant};
use crate::markdown::parse_markdown;

const ABOUT_MD: &str = "\
This application demonstrates modern front-end development practices including:

- **Component Architecture:** reusable, typed Leptos components with explicit props
- **State Management:** stores with a defined mutation API, mirrored into fine-grained reactive state
- **Data Loading:** simulated asynchronous fetching with loading, error and retry states
- **Responsive Design:** mobile-first layout with Tailwind CSS and a persistent dark mode
- **Modern Tooling:** Rust compiled to WebAssembly, with the core logic unit tested natively
";

#[component]
pub fn About() -> impl IntoView {
    let html = parse_markdown(ABOUT_MD);

    view! {
        <section id="about" class="py-16 bg-white dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white mb-8">
                        "About This Project"
                    </h2>
                    <div class="max-w-4xl mx-auto">
                        <Card variant=CardVariant::Outlined padding=CardPadding::Lg>
                            <div
                                class="prose prose-lg dark:prose-invert max-w-none text-left text-gray-600 dark:text-gray-400"
                                inner_html=html
                            />
                        </Card>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_renders_list() {
        let html = parse_markdown(ABOUT_MD);
        assert_eq!(html.matches("<li>").count(), 5);
        assert!(html.contains("<strong>Component Architecture:</strong>"));
    }
}
