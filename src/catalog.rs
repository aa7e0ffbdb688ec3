//! Article Catalog
//!
//! Fixed in-process article table with 1-based paging and text search.

use crate::models::Article;

pub const ARTICLES: [Article; 10] = [
    Article {
        id: 1,
        title: "Getting Started with React Development",
        body: "React is a powerful JavaScript library for building user interfaces. It allows developers to create reusable UI components and manage state efficiently. This article covers the basics of setting up a React project and understanding its core concepts.",
        user_id: 1,
    },
    Article {
        id: 2,
        title: "Understanding TypeScript in Modern Web Development",
        body: "TypeScript brings static type checking to JavaScript, making code more maintainable and less prone to errors. Learn how to integrate TypeScript with React projects and leverage its powerful type system for better development experience.",
        user_id: 2,
    },
    Article {
        id: 3,
        title: "Mastering CSS with Tailwind CSS Framework",
        body: "Tailwind CSS is a utility-first CSS framework that provides low-level utility classes to build custom designs. Discover how to create responsive, modern interfaces using Tailwind's comprehensive design system and utility classes.",
        user_id: 3,
    },
    Article {
        id: 4,
        title: "State Management in React Applications",
        body: "Managing state in React applications can be challenging as they grow in complexity. Explore different state management solutions including useState, useContext, and external libraries like Redux for handling application state effectively.",
        user_id: 1,
    },
    Article {
        id: 5,
        title: "API Integration and Data Fetching Patterns",
        body: "Learn how to integrate external APIs into your React applications. This guide covers different data fetching patterns, error handling, loading states, and best practices for managing asynchronous operations in modern web applications.",
        user_id: 4,
    },
    Article {
        id: 6,
        title: "Building Responsive Web Applications",
        body: "Responsive design is crucial for modern web applications. Understand how to create layouts that work seamlessly across different devices and screen sizes using CSS Grid, Flexbox, and responsive design principles.",
        user_id: 2,
    },
    Article {
        id: 7,
        title: "Modern JavaScript Features and ES6+",
        body: "JavaScript has evolved significantly with ES6 and beyond. Explore modern JavaScript features like arrow functions, destructuring, async/await, modules, and other syntax improvements that make development more efficient and code more readable.",
        user_id: 3,
    },
    Article {
        id: 8,
        title: "Testing React Components and Applications",
        body: "Testing is an essential part of building reliable React applications. Learn about different testing strategies, tools like Jest and React Testing Library, and how to write effective unit and integration tests for your components.",
        user_id: 5,
    },
    Article {
        id: 9,
        title: "Performance Optimization in React",
        body: "Optimizing React applications for better performance is crucial for user experience. Discover techniques like code splitting, lazy loading, memoization, and other optimization strategies to build fast and efficient applications.",
        user_id: 1,
    },
    Article {
        id: 10,
        title: "Deployment and DevOps for React Applications",
        body: "Learn how to deploy React applications to production environments. This guide covers different deployment platforms, CI/CD pipelines, environment configuration, and best practices for maintaining production applications.",
        user_id: 4,
    },
];

/// Read-only view over an article table
#[derive(Debug, Clone, Copy)]
pub struct ArticleCatalog {
    articles: &'static [Article],
}

impl Default for ArticleCatalog {
    fn default() -> Self {
        Self::new(&ARTICLES)
    }
}

impl ArticleCatalog {
    pub fn new(articles: &'static [Article]) -> Self {
        Self { articles }
    }

    /// 1-based page; page 0, a zero page size, or a page past the end is empty
    pub fn page(&self, page_number: u32, page_size: usize) -> &'static [Article] {
        if page_number == 0 || page_size == 0 {
            return &[];
        }
        let start = (page_number as usize - 1).saturating_mul(page_size);
        if start >= self.articles.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(self.articles.len());
        &self.articles[start..end]
    }

    /// Never less than one, so an empty catalog still renders "Page 1 of 1"
    pub fn total_pages(&self, page_size: usize) -> u32 {
        if page_size == 0 {
            return 1;
        }
        let pages = self.articles.len().div_ceil(page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// Case-insensitive substring match on title or body, order preserved
pub fn search(articles: &[Article], term: &str) -> Vec<Article> {
    let needle = term.to_lowercase();
    articles
        .iter()
        .filter(|a| a.matches_lowercase(&needle))
        .copied()
        .collect()
}
