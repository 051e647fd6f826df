//! SeaORM entities for the outlet database.

pub mod category;
pub mod outlet;
pub mod prelude;
