//! UseCase 層
//!
//! アプリケーションの操作を実装するレイヤー。
//! UI 層（リモートサービスのエンドポイント）から呼び出され、Domain 層を操作します。

pub mod calculator;
pub mod error;
pub mod room_directory;

pub use calculator::CalculatorUseCase;
pub use error::{CalculatorError, RoomLookupError};
pub use room_directory::RoomDirectoryUseCase;
