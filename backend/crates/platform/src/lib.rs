//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie construction and extraction
//! - Client for the external image-hosting service

pub mod cookie;
pub mod images;
