//! Domain layer for the minirpc services.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs), transport and infrastructure concerns.

pub mod calculator;
pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use calculator::Calculator;
pub use entity::RoomRecord;
pub use error::{RepositoryError, ValueObjectError};
pub use repository::RoomRepository;
pub use value_object::{Marks, RoomNumber};
