//! HTTP request handlers.

pub(crate) mod fragments;
pub(crate) mod page;
