//! Ratatui front end: a table view with a command prompt underneath.

pub mod app;
pub mod controller;
pub mod ui;
