//! dfrp-export library
//!
//! This crate provides the core functionality for the `dfrp-export` binary, which
//! flattens the Directory of Federal Real Property XML dump into relational CSV
//! tables that can be imported into a database or GIS tool.
//!
//! ## Overview
//!
//! - [`parser`] - Loads the XML document into an in-memory element tree and offers
//!   path-based accessors for optional and mandatory fields
//! - [`exporter`] - Walks Property → Parcel → Structure → Tenant/Photo and writes
//!   one row per entity, deduplicating custodians by code
//! - [`models`] - Output tables, their headers, and the row types written to them
//! - [`config`] - Input and output paths, from flags or a TOML file
//! - [`cli`] - Command-line interface
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use dfrp_export::{config::ResolvedConfig, errors::AppResult, exporter};
//! use std::path::PathBuf;
//!
//! # fn example() -> AppResult<()> {
//! let config = ResolvedConfig {
//!     base_dir: PathBuf::from("C:/GIS/DFRP"),
//!     ..ResolvedConfig::default()
//! };
//! let stats = exporter::run_export(&config)?;
//! println!("{} rows written", stats.total_rows());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod ui;
pub mod utils;
