//! Versioned cell matrix with change notification.
//!
//! [`CellModel`] owns the backing storage for the shared table: one
//! [`Cell`](wordfog_core::Cell) per coordinate, row-major. All writes go
//! through validated mutators that increment the model version, set the
//! dirty flag, and synchronously deliver a [`ModelEvent`] to every
//! subscribed observer, in mutation order, with no coalescing. Reads
//! hand out copies.
//!
//! Renderers that prefer pulling over callbacks can take a
//! channel subscription via [`CellModel::event_channel`] and drain the
//! ordered event replay after an operation returns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod model;

pub use error::ModelError;
pub use event::{ModelEvent, ModelObserver};
pub use model::CellModel;
