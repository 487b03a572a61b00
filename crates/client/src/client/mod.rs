//! The session-scoped reference-data client.
//!
//! [`DataClient`] owns one [`ReferenceDataSession`] for its whole
//! lifetime and serializes every request through it: submit, then drain
//! events until the single response arrives or the wait budget runs out.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::RefDataError;
use crate::models::{
    DatedTable, Periodicity, PointRequest, RangeRequest, Scalar, TableRow, OHLC_FIELDS,
};
use crate::session::{
    HistoricalPayload, ReferenceDataSession, ReferencePayload, ResponseMessage, SessionEvent,
    SessionRequest,
};

use chrono::NaiveDate;

/// Wait-loop configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Total budget for one request's response to arrive.
    pub response_timeout: Duration,

    /// How many intermediate status/partial events may be drained for a
    /// single request before the wait is abandoned.
    pub max_drained_events: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            response_timeout: Duration::from_secs(30),
            max_drained_events: 64,
        }
    }
}

/// Client for point and historical lookups against a reference-data
/// service.
///
/// Construction is the expensive step: it opens the session once, and
/// every subsequent request reuses it. Requests take `&mut self`, so a
/// single instance never has more than one request in flight; to share a
/// client across threads, wrap it in a mutex.
///
/// # Example
///
/// ```ignore
/// let mut client = DataClient::open(session, ClientConfig::default())?;
/// let price = client.point_lookup("US900123AL40 Govt", "PX_LAST")?;
/// let series = client.ohlc("SPX Index", start, end, Periodicity::Daily)?;
/// client.close();
/// ```
pub struct DataClient<S: ReferenceDataSession> {
    /// `None` after `close()`; requests then fail with `InvalidState`.
    session: Option<S>,
    config: ClientConfig,
}

impl<S: ReferenceDataSession> DataClient<S> {
    /// Open the session and wrap it in a client.
    ///
    /// Fails with [`RefDataError::Connection`] if the service cannot be
    /// reached or the reference-data service cannot be opened.
    pub fn open(mut session: S, config: ClientConfig) -> Result<Self, RefDataError> {
        session
            .open()
            .map_err(|e| RefDataError::Connection {
                message: e.to_string(),
            })?;
        debug!("reference-data session opened");
        Ok(Self {
            session: Some(session),
            config,
        })
    }

    /// Release the session.
    ///
    /// Idempotent; after the first call every request method fails with
    /// [`RefDataError::InvalidState`]. Dropping an unclosed client also
    /// releases the session.
    pub fn close(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
            debug!("reference-data session closed");
        }
    }

    /// Whether the client still holds an open session.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Current value of one field for one instrument (bdp).
    ///
    /// The service's `#N/A` marker comes back as [`Scalar::Missing`],
    /// never as the literal text.
    pub fn point(&mut self, request: &PointRequest) -> Result<Scalar, RefDataError> {
        let wire = SessionRequest::from(request);
        debug!(
            security = request.ticker(),
            field = request.field(),
            "submitting reference request"
        );
        let message = self.submit_and_wait(&wire)?;
        map_point(request.field(), message)
    }

    /// Convenience form of [`point`](Self::point) without an override.
    pub fn point_lookup(&mut self, ticker: &str, field: &str) -> Result<Scalar, RefDataError> {
        self.point(&PointRequest::new(ticker, field.to_string())?)
    }

    /// Historical series of one or more fields over a date range (bdh).
    ///
    /// The returned table has one row per dated record in the response
    /// and one column per requested field, in request order. Points the
    /// service has no history for are `None` cells.
    pub fn range(&mut self, request: &RangeRequest) -> Result<DatedTable, RefDataError> {
        let wire = SessionRequest::from(request);
        debug!(
            security = request.ticker(),
            fields = request.fields().len(),
            periodicity = request.periodicity().as_str(),
            "submitting historical request"
        );
        let message = self.submit_and_wait(&wire)?;
        map_range(request, message)
    }

    /// Convenience form of [`range`](Self::range) for a single field at
    /// daily periodicity.
    pub fn range_lookup(
        &mut self,
        ticker: &str,
        field: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DatedTable, RefDataError> {
        self.range(&RangeRequest::single(ticker, field.to_string(), start, end)?)
    }

    /// Historical open/high/low/last series (bdhOHLC).
    ///
    /// Identical to calling [`range`](Self::range) with the fixed field
    /// sequence `PX_OPEN, PX_HIGH, PX_LOW, PX_LAST`.
    pub fn ohlc(
        &mut self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        periodicity: Periodicity,
    ) -> Result<DatedTable, RefDataError> {
        let request =
            RangeRequest::new(ticker, OHLC_FIELDS, start, end)?.with_periodicity(periodicity);
        self.range(&request)
    }

    /// Submit one request and block until its response event arrives.
    ///
    /// Intermediate session/service status and partial events are
    /// drained and logged, up to the configured cap; the whole wait is
    /// bounded by the configured response timeout.
    fn submit_and_wait(
        &mut self,
        request: &SessionRequest,
    ) -> Result<ResponseMessage, RefDataError> {
        let session = self.session.as_mut().ok_or(RefDataError::InvalidState)?;
        session.send(request)?;

        let deadline = Instant::now() + self.config.response_timeout;
        let mut drained = 0usize;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                warn!(drained, "timed out waiting for response event");
                return Err(RefDataError::Timeout);
            }
            match session.next_event(remaining)? {
                SessionEvent::Response(message) => return Ok(message),
                SessionEvent::SessionStatus { message } => {
                    debug!(%message, "draining session status event");
                    drained += 1;
                }
                SessionEvent::ServiceStatus { message } => {
                    debug!(%message, "draining service status event");
                    drained += 1;
                }
                SessionEvent::Partial(_) => {
                    debug!("draining partial response event");
                    drained += 1;
                }
            }
            if drained > self.config.max_drained_events {
                warn!(drained, "abandoning wait after intermediate event flood");
                return Err(RefDataError::Request {
                    message: format!(
                        "no response after {} intermediate events",
                        drained
                    ),
                });
            }
        }
    }
}

impl<S: ReferenceDataSession> Drop for DataClient<S> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Extract the scalar result of a point lookup from a response message.
fn map_point(field: &str, message: ResponseMessage) -> Result<Scalar, RefDataError> {
    let payload = expect_reference(message)?;
    let entry = payload
        .securities
        .first()
        .ok_or_else(|| RefDataError::data("reference response carried no security entries"))?;
    let cell = entry
        .fields
        .iter()
        .find(|f| f.name == field)
        .ok_or_else(|| RefDataError::FieldNotFound {
            field: field.to_string(),
        })?;

    use crate::session::WireValue;
    match &cell.value {
        value if value.is_not_available() => {
            debug!(field, "normalizing not-available marker to missing value");
            Ok(Scalar::Missing)
        }
        WireValue::Number(raw) => decimal_cell(field, *raw).map(Scalar::Number),
        WireValue::Text(text) => Ok(Scalar::Text(text.clone())),
    }
}

/// Assemble the dated table of a historical lookup from a response message.
fn map_range(request: &RangeRequest, message: ResponseMessage) -> Result<DatedTable, RefDataError> {
    let payload = expect_historical(message)?;
    if payload.records.is_empty() {
        return Err(RefDataError::EmptyResult);
    }

    let fields = request.fields().to_vec();
    // A field the service never mentions is a bad mnemonic, not sparse
    // history; track per-column presence across all records.
    let mut seen = vec![false; fields.len()];
    let mut rows = Vec::with_capacity(payload.records.len());

    for record in &payload.records {
        let mut cells = Vec::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            let entry = record.values.iter().find(|v| v.name == **field);
            match entry {
                None => cells.push(None),
                Some(entry) => {
                    seen[index] = true;
                    use crate::session::WireValue;
                    match &entry.value {
                        value if value.is_not_available() => cells.push(None),
                        WireValue::Number(raw) => cells.push(Some(decimal_cell(field, *raw)?)),
                        WireValue::Text(text) => {
                            return Err(RefDataError::data(format!(
                                "non-numeric historical cell for {}: {}",
                                field, text
                            )));
                        }
                    }
                }
            }
        }
        rows.push(TableRow::new(record.date, cells));
    }

    if let Some(index) = seen.iter().position(|present| !present) {
        return Err(RefDataError::FieldNotFound {
            field: fields[index].to_string(),
        });
    }

    Ok(DatedTable::new(fields, rows))
}

fn expect_reference(message: ResponseMessage) -> Result<ReferencePayload, RefDataError> {
    match message {
        ResponseMessage::Reference(payload) => Ok(payload),
        ResponseMessage::RequestFailure { message } => Err(RefDataError::Request { message }),
        ResponseMessage::Historical(_) => Err(RefDataError::data(
            "historical payload answered a reference request",
        )),
    }
}

fn expect_historical(message: ResponseMessage) -> Result<HistoricalPayload, RefDataError> {
    match message {
        ResponseMessage::Historical(payload) => Ok(payload),
        ResponseMessage::RequestFailure { message } => Err(RefDataError::Request { message }),
        ResponseMessage::Reference(_) => Err(RefDataError::data(
            "reference payload answered a historical request",
        )),
    }
}

fn decimal_cell(field: &str, raw: f64) -> Result<Decimal, RefDataError> {
    Decimal::from_f64_retain(raw).ok_or_else(|| {
        RefDataError::data(format!("unrepresentable numeric cell for {}: {}", field, raw))
    })
}
