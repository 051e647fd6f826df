//! McMap Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the outlet
//! API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_outlet_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_outlet_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let outlet = factory::create_outlet(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
