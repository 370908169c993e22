//! egui desktop front end for the hilo number-guessing game.
//!
//! Renders the two screens (name entry and play) plus an on-demand
//! top-scores window. The current session, player label, and leaderboard
//! live here as plain values owned by the app struct; all game rules come
//! from `hilo-core`.

mod app;
pub use app::GuessApp;
