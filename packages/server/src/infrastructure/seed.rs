//! Seed data for the room directory.
//!
//! The directory is populated once at startup, either from the built-in
//! hostel fixture or from a JSON file of [`RoomRecordDto`] objects.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    domain::{RepositoryError, RoomNumber, RoomRecord, ValueObjectError},
    infrastructure::{dto::rpc::RoomRecordDto, repository::InMemoryRoomRepository},
};

/// Built-in hostel rooms: (room number, occupants, warden contact)
const DEFAULT_ROOMS: &[(&str, &[&str], &str)] = &[
    ("101", &["Rajesh Kumar", "Amit Sharma"], "+91-9876543210"),
    ("102", &["Priya Patel", "Sneha Reddy"], "+91-9876543210"),
    ("103", &["Arjun Singh"], "+91-9876543211"),
    ("201", &["Kavya Iyer", "Meera Nair", "Divya Krishna"], "+91-9876543211"),
    ("202", &["Vikram Rao", "Karthik Menon"], "+91-9876543212"),
    ("203", &["Ananya Das"], "+91-9876543212"),
    ("301", &["Rohan Desai", "Sanjay Verma"], "+91-9876543213"),
    ("302", &["Neha Gupta", "Pooja Jain"], "+91-9876543213"),
];

/// Errors raised while seeding the room directory
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read rooms file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rooms file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid room record: {0}")]
    InvalidRecord(#[from] ValueObjectError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// The built-in hostel fixture.
pub fn default_rooms() -> Result<Vec<RoomRecord>, SeedError> {
    DEFAULT_ROOMS
        .iter()
        .map(|(number, occupants, contact)| -> Result<RoomRecord, SeedError> {
            let record = RoomRecord::new(
                RoomNumber::new((*number).to_string())?,
                occupants.iter().map(|name| (*name).to_string()).collect(),
                *contact,
            );
            Ok(record)
        })
        .collect()
}

/// Load room records from a JSON array file.
pub fn load_rooms_file(path: &Path) -> Result<Vec<RoomRecord>, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dtos: Vec<RoomRecordDto> =
        serde_json::from_str(&content).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let records = dtos
        .into_iter()
        .map(RoomRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Build the room repository from a rooms file, or from the built-in fixture.
pub fn build_room_repository(
    rooms_file: Option<&Path>,
) -> Result<InMemoryRoomRepository, SeedError> {
    let records = match rooms_file {
        Some(path) => {
            tracing::info!("Seeding rooms from {}", path.display());
            load_rooms_file(path)?
        }
        None => default_rooms()?,
    };
    Ok(InMemoryRoomRepository::from_records(records)?)
}
