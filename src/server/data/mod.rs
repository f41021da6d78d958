//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries behind small typed methods. They are generic over
//! `ConnectionTrait` so callers can pass either a pooled connection or a transaction.

pub mod player_rank;

#[cfg(test)]
mod tests;
