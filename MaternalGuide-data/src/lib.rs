// MaternalGuide Data
// This crate handles the prediction service interactions

// Client configuration
pub mod config;

// Prediction service client
pub mod client;

// Wire models
pub mod models;

pub use client::{ApiError, HttpPredictionClient, PredictionApi};
pub use config::{ApiConfig, ConfigError};
