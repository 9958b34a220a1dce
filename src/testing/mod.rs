//! Headless testing helpers: recording capabilities, Pilot, outlines.
//!
//! Use [`RecordingCapabilities`] to observe what a dispatch did, the [`Pilot`]
//! to compose a document and click its CTAs, and [`outline`] to capture a
//! render tree as plain text for snapshot assertions.

pub mod capabilities;
pub mod pilot;
pub mod snapshot;

pub use capabilities::{Call, RecordingCapabilities};
pub use pilot::Pilot;
pub use snapshot::{outline, outline_from};
