//! Habit and wellness tracking backend.
//!
//! Tend is a small REST service for tracking daily habits, journaling, and
//! asking a generative-AI wellness coach for advice. Habit completion is
//! recorded as one row per (habit, date) — the row's existence *is* the
//! completed state — and a consecutive-day streak is derived by walking
//! backward from today over that ledger.
//!
//! # Architecture
//!
//! - **Storage**: SQLite via rusqlite, WAL mode, referential integrity with
//!   cascade deletes (user → habit definitions → completions)
//! - **API**: axum REST routes over a shared connection, blocking database
//!   work moved off the async runtime
//! - **Coach**: pass-through to the Gemini `generateContent` API with a fixed
//!   wellness-coach system instruction
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization, schema, migrations, and health checks
//! - [`store`] — Core domain logic: users, habit definitions, the completion
//!   ledger, streak/dashboard views, and the journal
//! - [`coach`] — Generative-AI coach provider trait and the Gemini implementation

pub mod coach;
pub mod config;
pub mod db;
pub mod store;
