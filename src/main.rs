#![allow(warnings)]
//! Reservation Form Frontend Entry Point

mod api;
mod app;
mod calendar;
mod components;
mod config;
mod dom;
mod models;
mod notify;
mod space_picker;
mod store;
mod validators;

fn main() {
    console_error_panic_hook::set_once();
    app::boot();
}
