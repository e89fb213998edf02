//! Response-shaping helpers for API handlers.
//!
//! Every endpoint returns an [`Envelope`]; these helpers pair one with the
//! axum types handlers actually return, instead of each handler assembling
//! `(StatusCode, Json(...))` tuples by hand.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use vvv_core::envelope::Envelope;

/// 200 envelope with an empty message.
pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope::success(data))
}

/// 200 envelope with a message.
pub fn ok_with_message<T: Serialize>(data: T, message: &str) -> Json<Envelope<T>> {
    Json(Envelope::with_message(data, message))
}

/// 201 envelope with a message.
pub fn created<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(Envelope::with_message(data, message)))
}
