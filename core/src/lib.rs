pub mod classify;
pub mod dashboard;
pub mod encode;
pub mod error;
pub mod generator;
pub mod render;
pub mod scan;
pub mod store;
pub mod types;

pub use classify::classify;
pub use dashboard::{Dashboard, DashboardEntry, Notice, NoticeKind};
pub use error::{Error, Result};
pub use generator::{Generator, PreviewRequest};
pub use render::{ExportFormat, render};
pub use scan::{FrameDecoder, FrameSource, GridDecoder, ImageFiles, ScanPoll, ScanSession};
pub use store::{MemorySlot, RedbSlot, SavedCodeStore, Slot};
pub use types::{
    AppConfig, Colors, Config, Content, ContentType, Customization, EcLevel, HexColor,
    ModulePattern, RecordDraft, RecordId, RecordName, RecordUpdate, SavedRecord,
};
