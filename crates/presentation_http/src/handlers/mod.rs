//! HTTP request handlers

pub mod weather;
