//! The `actix-web` HTTP surface (spec.md §6), grounded in
//! `other_examples/.../marceloleda-web-framework-benchmark/api-actix/src/main.rs`'s
//! `AppState`/resource layout, and in `original_source/app/app.py`'s route
//! table.
pub mod dto;
pub mod handlers;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/market/{symbol}", web::get().to(handlers::get_market))
        .route("/history", web::get().to(handlers::get_history))
        .route("/order", web::get().to(handlers::get_orders))
        .route("/order", web::post().to(handlers::post_order))
        .route("/order", web::delete().to(handlers::delete_order))
        .route("/account/positions", web::get().to(handlers::get_positions))
        .route("/account/summary", web::get().to(handlers::get_account_summary))
        .route("/account/update", web::get().to(handlers::get_account_update))
        .route("/clients", web::get().to(handlers::get_clients));
}
