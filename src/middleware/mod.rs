//! HTTP middleware applied to every response.

pub mod cors;
