//! Data models for the Bookstore server

pub mod book;
pub mod messages;
pub mod pager;
