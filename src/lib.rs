//! Deduction Engine - expense categorization and questionnaire reconciliation
//!
//! This library turns raw spending analytics into deduction category groups
//! with per-category ceilings, summarizes where deductible spending goes,
//! reconciles questionnaire submissions with stored answers, maps answers
//! onto display sections, and builds filter queries from query strings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (analytics rows, groups, questionnaires, filters)
//! - `services`: The engine operations
//! - `storage`: Reading inputs and writing results
//! - `reports`: Deductible spending report
//! - `export`: JSON and YAML output
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `deduction` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use deduction_engine::config::{EnginePaths, Settings};
//! use deduction_engine::services::CategoryAggregator;
//!
//! let paths = EnginePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let groups = CategoryAggregator::new(&settings.thresholds).aggregate(&groups, &analytics, &[]);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::EngineError;
