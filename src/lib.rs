//! taskscreen - terminal client for a remote task list API

pub mod api;
pub mod cli;
pub mod config;
pub mod filter;
pub mod prefs;
pub mod screen;
pub mod tui;
