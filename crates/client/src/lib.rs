//! Refdata Client Crate
//!
//! A typed, session-scoped client for a reference-data service, exposing
//! the two spreadsheet operations over one long-lived session:
//! point lookup (bdp) and historical range lookup (bdh), plus the fixed
//! OHLC composition of the latter.
//!
//! # Overview
//!
//! The client supports:
//! - Point lookups with an optional request-scoped override pair
//! - Historical series of one or more fields at a chosen periodicity
//! - Normalization of the service's `#N/A` markers to explicit missing values
//! - A bounded, timeout-guarded wait for each response
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   PointRequest   |     |   RangeRequest   |  (validated inputs)
//! +------------------+     +------------------+
//!           |                       |
//!           v                       v
//!          +-------------------------+
//!          |       DataClient        |  (one session, one request at a time)
//!          +-------------------------+
//!                       |
//!                       v
//!          +-------------------------+
//!          |  ReferenceDataSession   |  (vendor SDK binding, out of scope)
//!          +-------------------------+
//!                       |
//!                       v
//!           +----------+-----------+
//!           |  Scalar  | DatedTable|  (results)
//!           +----------+-----------+
//! ```
//!
//! # Core Types
//!
//! - [`DataClient`] - The session-scoped client
//! - [`PointRequest`] / [`RangeRequest`] - Validated request descriptions
//! - [`Scalar`] - Point result (number, text, or missing)
//! - [`DatedTable`] - Date-indexed historical result
//! - [`ReferenceDataSession`] - The vendor boundary trait
//! - [`RefDataError`] - The error taxonomy; nothing is retried internally

pub mod client;
pub mod errors;
pub mod models;
pub mod session;

// Re-export all public types from models
pub use models::{
    DatedTable, FieldName, Override, Periodicity, PointRequest, RangeRequest, Scalar, TableRow,
    OHLC_FIELDS, PX_HIGH, PX_LAST, PX_LOW, PX_OPEN,
};

// Re-export client types
pub use client::{ClientConfig, DataClient};

// Re-export error types
pub use errors::{FaultClass, RefDataError};

// Re-export session boundary types
pub use session::{
    DatedRecord, FieldEntry, HistoricalPayload, ReferenceDataSession, ReferencePayload,
    ResponseMessage, SecurityEntry, SessionError, SessionEvent, SessionRequest, WireValue,
};
