//! Wire-shaped request and event types exchanged with the session layer.
//!
//! These mirror the element structure of the vendor's reference-data
//! service. Session implementations translate them to and from the
//! vendor SDK's message objects; this crate never touches the transport.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Override, PointRequest, RangeRequest};

/// Wire date format used by the service (`YYYYMMDD`).
const WIRE_DATE_FORMAT: &str = "%Y%m%d";

/// A request as handed to the session for submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionRequest {
    /// Single-security, single-field reference lookup.
    Reference {
        security: String,
        field: String,
        #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
        override_pair: Option<Override>,
    },
    /// Historical series over a date range.
    Historical {
        security: String,
        fields: Vec<String>,
        /// Inclusive start, `YYYYMMDD`.
        start_date: String,
        /// Inclusive end, `YYYYMMDD`.
        end_date: String,
        periodicity: String,
    },
}

impl From<&PointRequest> for SessionRequest {
    fn from(request: &PointRequest) -> Self {
        Self::Reference {
            security: request.ticker().to_string(),
            field: request.field().to_string(),
            override_pair: request.override_pair().cloned(),
        }
    }
}

impl From<&RangeRequest> for SessionRequest {
    fn from(request: &RangeRequest) -> Self {
        Self::Historical {
            security: request.ticker().to_string(),
            fields: request.fields().iter().map(|f| f.to_string()).collect(),
            start_date: request.start().format(WIRE_DATE_FORMAT).to_string(),
            end_date: request.end().format(WIRE_DATE_FORMAT).to_string(),
            periodicity: request.periodicity().as_str().to_string(),
        }
    }
}

/// One event observed on the session while a request is outstanding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Session-level status (connection up, slow consumer, ...).
    SessionStatus { message: String },

    /// Service-level status (service opened, ...).
    ServiceStatus { message: String },

    /// A partial response; more events follow.
    Partial(ResponseMessage),

    /// The final response for the outstanding request.
    Response(ResponseMessage),
}

/// The message carried by a response or partial-response event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseMessage {
    /// Payload of a reference (point) request.
    Reference(ReferencePayload),

    /// Payload of a historical request.
    Historical(HistoricalPayload),

    /// The service rejected the request with an error status.
    RequestFailure { message: String },
}

/// Payload of a reference-data response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferencePayload {
    /// One entry per requested security. The client sends exactly one
    /// security per request, so the first entry is the result.
    pub securities: Vec<SecurityEntry>,
}

/// Per-security field data in a reference response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecurityEntry {
    pub security: String,
    pub fields: Vec<FieldEntry>,
}

/// One named field value as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub value: WireValue,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, value: WireValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Payload of a historical-data response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPayload {
    pub security: String,
    /// Dated records in the order returned by the service
    /// (ascending dates).
    pub records: Vec<DatedRecord>,
}

/// One dated record of a historical response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatedRecord {
    pub date: NaiveDate,
    pub values: Vec<FieldEntry>,
}

/// A raw field value as it appears on the wire.
///
/// The service reports unavailable data in-band as text markers of the
/// `#N/A` family (`#N/A`, `#N/A History`, ...); [`WireValue::is_not_available`]
/// recognizes them so the client can normalize to a missing value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    Number(f64),
    Text(String),
}

impl WireValue {
    /// Whether this value is one of the service's "not available" markers.
    pub fn is_not_available(&self) -> bool {
        match self {
            Self::Text(text) => text.starts_with("#N/A"),
            Self::Number(_) => false,
        }
    }
}
