//! API route handlers

pub mod data;
pub mod health;
pub mod manifest;
pub mod pages;
