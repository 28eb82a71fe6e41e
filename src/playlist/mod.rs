//! # Playlist Engines
//!
//! Fork and merge orchestration on top of [`SpotifyApi`](crate::spotify::SpotifyApi).
//!
//! ## Data Flow
//!
//! ```text
//! fork / merge
//!     ├── create target playlist
//!     ├── aggregate   (paginate, skip local tracks, dedupe, join names)
//!     ├── write_tracks (chunks of 100, strictly in order)
//!     └── rename       (merge only, once the combined name is known)
//! ```
//!
//! ## Ordering
//!
//! Sources are processed one after another in the order given by the caller.
//! That order decides both the combined name and the first-occurrence order of
//! the tracks. Track pages of one source and track chunks of one write are
//! issued serially.
//!
//! ## Failure Semantics
//!
//! Every operation stops at the first failing remote call and returns that
//! error. Nothing is retried and nothing is rolled back: a playlist created
//! before a later failure stays, and so do track chunks appended before a
//! failing chunk.

mod aggregate;
mod fork;
mod merge;
mod writer;

pub use aggregate::aggregate;
pub use fork::fork;
pub use merge::{MERGE_PLACEHOLDER_NAME, merge};
pub use writer::write_tracks;
