//! Command bridge for shell front-ends.
//!
//! Every command returns `Result<_, String>` so a UI layer can forward
//! failures verbatim.

pub mod clipboard;
pub mod dto;
pub mod error;

pub use clipboard::ClipCommands;
pub use dto::ClipRecordDto;
pub use error::map_err;
