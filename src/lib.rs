#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]

pub mod app;
pub mod calendar;
pub mod config;
pub mod logger;
pub mod messaging;
pub mod views;
