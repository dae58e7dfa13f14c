//! API handlers for the Bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod pager;
