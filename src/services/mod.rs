//! Core services for building and parsing log-subscription traffic.
//!
//! - `subscription`: Filter request rendering and log response parsing

pub mod subscription;
