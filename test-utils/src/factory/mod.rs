//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let outlet = factory::outlet::OutletFactory::new(&db)
//!     .name("McDonald's Bukit Bintang")
//!     .address("Jalan Bukit Bintang, 55100 Kuala Lumpur")
//!     .coordinates(3.1466, 101.7101)
//!     .build()
//!     .await?;
//!
//! factory::create_category(&db, outlet.id, "24 Hours").await?;
//! ```

pub mod category;
pub mod helpers;
pub mod outlet;

pub use category::create_category;
pub use helpers::create_outlet_with_categories;
pub use outlet::create_outlet;
