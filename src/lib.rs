//! Showcase Frontend
//!
//! Single-page app: a persisted task list, a paginated article browser and
//! a persisted dark/light theme. The stores are plain Rust and tested
//! natively; the components bind them to the DOM through Leptos.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod context;
pub mod dom;
pub mod feed;
pub mod markdown;
pub mod models;
pub mod storage;
pub mod store;
pub mod tasks;
pub mod theme;
