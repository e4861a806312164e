//! # classpulse
//!
//! Leptos + WASM frontend for a student-feedback system: role-based login,
//! admin CRUD screens for students/teachers/courses, feedback submission,
//! and an analytics dashboard consuming a REST backend.
//!
//! The crate is client-side rendered. Browser-only dependencies live behind
//! the `csr` feature so the core logic (session persistence model, token
//! expiry checks, route gating, refresh orchestration) compiles and unit
//! tests on the native host.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
