//! SyllabusSync Dashboard
//!
//! Academic syllabus coverage dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Simulated faculty / HOD login persisted in localStorage
//! - Subject progress overview and teaching activity heatmap
//! - Syllabus mapping with prerequisite alerts
//! - Coverage analytics charts
//! - Quick lecture logger
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: every view renders sample data from the
//! `syllabus-sync` library.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
