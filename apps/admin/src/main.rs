//! # SchoolCart Admin Entry Point
//!
//! Seeds the stores, logs the startup alerts and exits. The setup lives in
//! `lib.rs` so tests can reach it.

fn main() {
    schoolcart_admin::run();
}
