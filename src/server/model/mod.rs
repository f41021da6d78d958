//! Server application models and type definitions.
//!
//! This module contains the application state shared with HTTP handlers and the database
//! model type aliases.

pub mod app;
pub mod db;
