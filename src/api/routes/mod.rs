//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod pages;
pub mod repos;
pub mod selection;
pub mod treemap;
