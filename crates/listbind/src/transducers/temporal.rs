//! Date and date-time transducers backed by `chrono`.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use listbind_support::{NamespaceScope, SerializationContext, Transducer, TransducerError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `xs:date` without a timezone, as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTransducer;

impl DateTransducer {
    pub fn new() -> Self {
        Self
    }
}

impl Transducer for DateTransducer {
    type Item = NaiveDate;

    fn print(
        &self,
        item: &NaiveDate,
        _ctx: &mut SerializationContext,
    ) -> Result<String, TransducerError> {
        Ok(item.format(DATE_FORMAT).to_string())
    }

    fn parse(&self, token: &str, _scope: &NamespaceScope) -> Result<NaiveDate, TransducerError> {
        if !is_date_lexical(token) {
            return Err(TransducerError::invalid(
                "date",
                token,
                "expected `YYYY-MM-DD` with two-digit month and day",
            ));
        }
        NaiveDate::parse_from_str(token, DATE_FORMAT)
            .map_err(|e| TransducerError::invalid("date", token, e))
    }
}

/// Checks the `xs:date` shape: `[-]YYYY-MM-DD`, at least four year digits
/// and no leading zero on longer years. Field ranges are left to chrono.
fn is_date_lexical(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let mut parts = unsigned.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    let year_ok = year.len() >= 4
        && year.bytes().all(|b| b.is_ascii_digit())
        && !(year.len() > 4 && year.starts_with('0'));

    year_ok && digits(month, 2) && digits(day, 2)
}

/// `xs:dateTime` with an explicit offset. UTC is printed as `Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeTransducer;

impl DateTimeTransducer {
    pub fn new() -> Self {
        Self
    }
}

impl Transducer for DateTimeTransducer {
    type Item = DateTime<FixedOffset>;

    fn print(
        &self,
        item: &DateTime<FixedOffset>,
        _ctx: &mut SerializationContext,
    ) -> Result<String, TransducerError> {
        Ok(item.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn parse(
        &self,
        token: &str,
        _scope: &NamespaceScope,
    ) -> Result<DateTime<FixedOffset>, TransducerError> {
        DateTime::parse_from_rfc3339(token)
            .map_err(|e| TransducerError::invalid("dateTime", token, e))
    }
}
