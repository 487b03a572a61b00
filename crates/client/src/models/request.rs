use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::RefDataError;

use super::types::FieldName;

/// Sampling frequency of a historical series.
///
/// Serialized with the service's wire spelling (`DAILY`, `SEMI_ANNUALLY`, ...).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Periodicity {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnually,
    Yearly,
}

impl Periodicity {
    /// The wire spelling expected by the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::SemiAnnually => "SEMI_ANNUALLY",
            Self::Yearly => "YEARLY",
        }
    }
}

/// Request-scoped override pair substituting an input to a field's
/// computation (e.g. pricing at a hypothetical yield).
///
/// Both halves are required; [`Override::new`] rejects an empty field or
/// value so a half-specified pair cannot reach the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    field: String,
    value: String,
}

impl Override {
    /// Create an override pair, validating that both halves are non-empty.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Result<Self, RefDataError> {
        let field = field.into();
        let value = value.into();
        if field.trim().is_empty() {
            return Err(RefDataError::invalid_argument(
                "override field must not be empty",
            ));
        }
        if value.trim().is_empty() {
            return Err(RefDataError::invalid_argument(
                "override value must not be empty",
            ));
        }
        Ok(Self { field, value })
    }

    /// The field being overridden.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The substituted value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A single-security, single-field point lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRequest {
    ticker: String,
    field: FieldName,
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    override_pair: Option<Override>,
}

impl PointRequest {
    /// Create a point request, validating the ticker and field.
    pub fn new(
        ticker: impl Into<String>,
        field: impl Into<FieldName>,
    ) -> Result<Self, RefDataError> {
        let ticker = ticker.into();
        let field = field.into();
        validate_ticker(&ticker)?;
        validate_field(&field)?;
        Ok(Self {
            ticker,
            field,
            override_pair: None,
        })
    }

    /// Attach an override pair to this request.
    pub fn with_override(mut self, override_pair: Override) -> Self {
        self.override_pair = Some(override_pair);
        self
    }

    /// The instrument identifier.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// The requested field mnemonic.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The attached override pair, if any.
    pub fn override_pair(&self) -> Option<&Override> {
        self.override_pair.as_ref()
    }
}

/// A historical time-series lookup over a date range.
///
/// Fields are an ordered sequence; the resulting table's columns follow
/// this order. Use [`RangeRequest::single`] for the one-field case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeRequest {
    ticker: String,
    fields: Vec<FieldName>,
    start: NaiveDate,
    end: NaiveDate,
    periodicity: Periodicity,
}

impl RangeRequest {
    /// Create a range request carrying one or more fields, defaulting to
    /// daily periodicity.
    pub fn new<I, F>(
        ticker: impl Into<String>,
        fields: I,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, RefDataError>
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldName>,
    {
        let ticker = ticker.into();
        let fields: Vec<FieldName> = fields.into_iter().map(Into::into).collect();
        validate_ticker(&ticker)?;
        if fields.is_empty() {
            return Err(RefDataError::invalid_argument(
                "at least one field is required",
            ));
        }
        for field in &fields {
            validate_field(field)?;
        }
        if start > end {
            return Err(RefDataError::invalid_argument(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self {
            ticker,
            fields,
            start,
            end,
            periodicity: Periodicity::default(),
        })
    }

    /// Convenience constructor for a single field.
    ///
    /// Behaves identically to [`RangeRequest::new`] with a one-element
    /// field sequence.
    pub fn single(
        ticker: impl Into<String>,
        field: impl Into<FieldName>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, RefDataError> {
        Self::new(ticker, [field.into()], start, end)
    }

    /// Set the sampling periodicity.
    pub fn with_periodicity(mut self, periodicity: Periodicity) -> Self {
        self.periodicity = periodicity;
        self
    }

    /// The instrument identifier.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// The requested fields, in column order.
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Start of the date range (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// End of the date range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The sampling periodicity.
    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }
}

fn validate_ticker(ticker: &str) -> Result<(), RefDataError> {
    if ticker.trim().is_empty() {
        return Err(RefDataError::invalid_argument("ticker must not be empty"));
    }
    Ok(())
}

fn validate_field(field: &str) -> Result<(), RefDataError> {
    if field.trim().is_empty() {
        return Err(RefDataError::invalid_argument(
            "field name must not be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RefDataError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_point_request_accessors() {
        let request = PointRequest::new("US900123AL40 Govt", "PX_LAST").unwrap();
        assert_eq!(request.ticker(), "US900123AL40 Govt");
        assert_eq!(request.field(), "PX_LAST");
        assert!(request.override_pair().is_none());
    }

    #[test]
    fn test_point_request_rejects_empty_ticker() {
        let error = PointRequest::new("", "PX_LAST").unwrap_err();
        assert!(matches!(error, RefDataError::InvalidArgument { .. }));
    }

    #[test]
    fn test_point_request_rejects_empty_field() {
        let error = PointRequest::new("SPX Index", "  ").unwrap_err();
        assert!(matches!(error, RefDataError::InvalidArgument { .. }));
    }

    #[test]
    fn test_override_requires_both_halves() {
        assert!(matches!(
            Override::new("PX_BID", "").unwrap_err(),
            RefDataError::InvalidArgument { .. }
        ));
        assert!(matches!(
            Override::new("", "200").unwrap_err(),
            RefDataError::InvalidArgument { .. }
        ));
        let ovr = Override::new("PX_BID", "200").unwrap();
        assert_eq!(ovr.field(), "PX_BID");
        assert_eq!(ovr.value(), "200");
    }

    #[test]
    fn test_point_request_with_override() {
        let request = PointRequest::new("US900123AL40 Govt", "YLD_YTM_BID")
            .unwrap()
            .with_override(Override::new("PX_BID", "200").unwrap());
        assert_eq!(request.override_pair().unwrap().field(), "PX_BID");
    }

    #[test]
    fn test_range_request_defaults_to_daily() {
        let request = RangeRequest::single(
            "SPX Index",
            "PX_LAST",
            date(2014, 1, 1),
            date(2014, 1, 9),
        )
        .unwrap();
        assert_eq!(request.periodicity(), Periodicity::Daily);
        assert_eq!(request.fields().len(), 1);
    }

    #[test]
    fn test_range_request_single_matches_one_element_sequence() {
        let single = RangeRequest::single(
            "SPX Index",
            "PX_LAST",
            date(2014, 1, 1),
            date(2014, 1, 9),
        )
        .unwrap();
        let sequence = RangeRequest::new(
            "SPX Index",
            ["PX_LAST"],
            date(2014, 1, 1),
            date(2014, 1, 9),
        )
        .unwrap();
        assert_eq!(single, sequence);
    }

    #[test]
    fn test_range_request_rejects_empty_fields() {
        let fields: [&str; 0] = [];
        let error =
            RangeRequest::new("SPX Index", fields, date(2014, 1, 1), date(2014, 1, 9)).unwrap_err();
        assert!(matches!(error, RefDataError::InvalidArgument { .. }));
    }

    #[test]
    fn test_range_request_rejects_inverted_range() {
        let error = RangeRequest::single(
            "SPX Index",
            "PX_LAST",
            date(2014, 1, 9),
            date(2014, 1, 1),
        )
        .unwrap_err();
        assert!(matches!(error, RefDataError::InvalidArgument { .. }));
    }

    #[test]
    fn test_periodicity_wire_spelling() {
        assert_eq!(Periodicity::Daily.as_str(), "DAILY");
        assert_eq!(Periodicity::SemiAnnually.as_str(), "SEMI_ANNUALLY");

        let json = serde_json::to_string(&Periodicity::SemiAnnually).unwrap();
        assert_eq!(json, "\"SEMI_ANNUALLY\"");
    }
}
