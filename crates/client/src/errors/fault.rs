/// Classification of where the fault for an error lies.
///
/// Used by callers to decide whether a failed request is worth repeating
/// with different arguments, reporting upstream, or treating as an outage.
///
/// # Behavior Summary
///
/// | Class | Fixable by the caller? | Typical reaction |
/// |-------|------------------------|------------------|
/// | `Caller` | Yes | Fix the arguments or client lifecycle |
/// | `Transport` | No | Reconnect, alert on repeated occurrences |
/// | `Service` | No | Inspect the service error message |
/// | `Data` | Sometimes | Check the field mnemonic or date range |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaultClass {
    /// The caller violated the client contract: bad arguments or a request
    /// issued after the client was closed. Resending unchanged won't help.
    Caller,

    /// The connection to the service failed or the wait for a response
    /// timed out. The session is suspect; the request itself may be fine.
    Transport,

    /// The service accepted the transport but rejected the request with an
    /// error status. The message carries whatever the service reported.
    Service,

    /// The response arrived but its contents did not satisfy the request:
    /// an absent field, an empty historical result, or a malformed cell.
    Data,
}
