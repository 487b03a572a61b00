//! Session abstraction over the vendor's reference-data service.
//!
//! This module defines the one external collaborator of the crate: a
//! [`ReferenceDataSession`] through which requests are submitted and
//! events are received. Transport, authentication, service discovery and
//! event dispatch all live behind this trait, inside the vendor SDK
//! binding that implements it.

mod wire;

pub use wire::{
    DatedRecord, FieldEntry, HistoricalPayload, ReferencePayload, ResponseMessage, SecurityEntry,
    SessionEvent, SessionRequest, WireValue,
};

use std::time::Duration;

use thiserror::Error;

/// Failures reported by the session layer.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The transport failed: unreachable service, dropped connection,
    /// or a send that could not be completed.
    #[error("transport failure: {0}")]
    Transport(String),

    /// No event became available within the wait budget.
    #[error("no event within the wait budget")]
    Timeout,
}

/// A session with the reference-data service.
///
/// Implement this trait in the vendor SDK binding to connect the client
/// to a real service. The client assumes exactly one request is
/// outstanding at a time and drives the session strictly synchronously:
/// one `send`, then `next_event` until the response arrives.
///
/// All methods take `&mut self`; a session is owned by exactly one
/// [`DataClient`](crate::DataClient) and is closed exactly once.
pub trait ReferenceDataSession: Send {
    /// Establish the session and open the reference-data service.
    ///
    /// Called once by [`DataClient::open`](crate::DataClient::open).
    /// Fails with [`SessionError::Transport`] if the service cannot be
    /// reached or opened. No retries are performed.
    fn open(&mut self) -> Result<(), SessionError>;

    /// Submit a request on the session.
    fn send(&mut self, request: &SessionRequest) -> Result<(), SessionError>;

    /// Block until the next event arrives, up to `timeout`.
    ///
    /// Returns [`SessionError::Timeout`] when no event arrives in time;
    /// the client surfaces that to the caller without retrying.
    fn next_event(&mut self, timeout: Duration) -> Result<SessionEvent, SessionError>;

    /// Release the session. Called exactly once, either by
    /// [`DataClient::close`](crate::DataClient::close) or on drop.
    fn close(&mut self);
}
