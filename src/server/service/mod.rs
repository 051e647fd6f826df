//! Business logic between controllers and the data layer.

pub mod chatbot;
pub mod outlet;
pub mod seed;

#[cfg(test)]
mod test;
