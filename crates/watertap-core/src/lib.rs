//! Core WaterTap library (server API client, config, logging, validation).

pub mod api;
pub mod config;
pub mod logging;
pub mod validation;
