//! Scripted stand-in for the vendor session binding.

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use refdata_client::{
    DatedRecord, FieldEntry, HistoricalPayload, ReferenceDataSession, ReferencePayload,
    ResponseMessage, SecurityEntry, SessionError, SessionEvent, SessionRequest, WireValue,
};

/// Replays a fixed event sequence and records everything sent through it.
///
/// Once the script is exhausted, `next_event` reports a timeout, which is
/// exactly what a silent service looks like to the client.
pub struct ScriptedSession {
    fail_open: bool,
    events: VecDeque<Result<SessionEvent, SessionError>>,
    sent: Arc<Mutex<Vec<SessionRequest>>>,
    closed: Arc<AtomicBool>,
}

impl ScriptedSession {
    pub fn new(events: impl IntoIterator<Item = Result<SessionEvent, SessionError>>) -> Self {
        Self {
            fail_open: false,
            events: events.into_iter().collect(),
            sent: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A session whose `open` fails, as when the service is unreachable.
    pub fn failing_open() -> Self {
        let mut session = Self::new([]);
        session.fail_open = true;
        session
    }

    /// Handle onto the log of sent requests, usable after the session has
    /// been handed to a client.
    pub fn sent_log(&self) -> Arc<Mutex<Vec<SessionRequest>>> {
        Arc::clone(&self.sent)
    }

    /// Handle onto the closed flag.
    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }
}

impl ReferenceDataSession for ScriptedSession {
    fn open(&mut self) -> Result<(), SessionError> {
        if self.fail_open {
            Err(SessionError::Transport("service unreachable".to_string()))
        } else {
            Ok(())
        }
    }

    fn send(&mut self, request: &SessionRequest) -> Result<(), SessionError> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(())
    }

    fn next_event(&mut self, _timeout: Duration) -> Result<SessionEvent, SessionError> {
        self.events.pop_front().unwrap_or(Err(SessionError::Timeout))
    }

    fn close(&mut self) {
        self.closed.store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A final response event carrying a reference payload with one security.
pub fn reference_response(security: &str, fields: Vec<FieldEntry>) -> Result<SessionEvent, SessionError> {
    Ok(SessionEvent::Response(ResponseMessage::Reference(
        ReferencePayload {
            securities: vec![SecurityEntry {
                security: security.to_string(),
                fields,
            }],
        },
    )))
}

/// A final response event carrying a historical payload.
pub fn historical_response(
    security: &str,
    records: Vec<DatedRecord>,
) -> Result<SessionEvent, SessionError> {
    Ok(SessionEvent::Response(ResponseMessage::Historical(
        HistoricalPayload {
            security: security.to_string(),
            records,
        },
    )))
}

/// A dated record with numeric cells for the given field/value pairs.
pub fn record(day: NaiveDate, values: &[(&str, f64)]) -> DatedRecord {
    DatedRecord {
        date: day,
        values: values
            .iter()
            .map(|(name, value)| FieldEntry::new(*name, WireValue::Number(*value)))
            .collect(),
    }
}

pub fn status(message: &str) -> Result<SessionEvent, SessionError> {
    Ok(SessionEvent::SessionStatus {
        message: message.to_string(),
    })
}
