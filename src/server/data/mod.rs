//! Database repository layer for outlets and their categories.
//!
//! Repositories use SeaORM entity models internally and expose simple query methods to
//! the service layer. All database queries and inserts are performed through these
//! repositories.

pub mod category;
pub mod outlet;

#[cfg(test)]
mod test;
