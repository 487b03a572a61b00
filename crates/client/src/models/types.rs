use std::borrow::Cow;

/// Field mnemonic (e.g. "PX_LAST") - mostly static constants
pub type FieldName = Cow<'static, str>;

/// Opening price mnemonic.
pub const PX_OPEN: &str = "PX_OPEN";
/// High price mnemonic.
pub const PX_HIGH: &str = "PX_HIGH";
/// Low price mnemonic.
pub const PX_LOW: &str = "PX_LOW";
/// Last/closing price mnemonic.
pub const PX_LAST: &str = "PX_LAST";

/// Field sequence used by [`DataClient::ohlc`](crate::DataClient::ohlc),
/// in column order.
pub const OHLC_FIELDS: [&str; 4] = [PX_OPEN, PX_HIGH, PX_LOW, PX_LAST];
