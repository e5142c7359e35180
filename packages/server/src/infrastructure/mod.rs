//! Infrastructure layer: wire DTOs, room storage and seed data.

pub mod dto;
pub mod repository;
pub mod seed;
