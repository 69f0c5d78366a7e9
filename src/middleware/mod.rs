/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - auth::inbound::apply, cors::apply, http::apply
 */
pub mod auth;
pub mod cors;
pub mod http;
