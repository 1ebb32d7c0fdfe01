//! Beverage image analysis service
//!
//! This library provides the pieces of the beverage-lens server: a single
//! endpoint that sends a data-URI image to an OpenAI vision model with a fixed
//! prompt and relays the model's JSON description of the beverage.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
