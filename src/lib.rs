//! cvd-recolor - colour-vision-deficiency recoloring service
//!
//! HTTP service and command-line tool around the `cvd-transform` pipeline.
//! This library exposes modules for integration testing.

pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
