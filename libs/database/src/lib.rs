//! Database connectors and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, config and health checks
//! - `config` - loading connector config through `core_config::FromEnv`
//! - `all` - everything
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017").with_database("testdb");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let items = client.database(&config.database).collection::<Document>(&config.collection);
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
