//! Reference-data models
//!
//! This module contains the core data types for client operations:
//! - `types` - Field name alias and the fixed OHLC mnemonics
//! - `request` - Request types (PointRequest, RangeRequest, Override, Periodicity)
//! - `scalar` - Point lookup result (Scalar)
//! - `table` - Historical lookup result (DatedTable, TableRow)

mod request;
mod scalar;
mod table;
mod types;

pub use request::{Override, Periodicity, PointRequest, RangeRequest};
pub use scalar::Scalar;
pub use table::{DatedTable, TableRow};
pub use types::{FieldName, OHLC_FIELDS, PX_HIGH, PX_LAST, PX_LOW, PX_OPEN};
