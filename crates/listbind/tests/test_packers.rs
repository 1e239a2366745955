mod common;

use std::collections::VecDeque;
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use common::{Slot, SlotAccessor};
use listbind::packers::{
    BoxedSlicePacker, NullableVecPacker, SharedSlicePacker, VecDequePacker, VecPacker,
};
use listbind::transducers::{
    BooleanTransducer, DateTimeTransducer, DateTransducer, DecimalTransducer, DoubleTransducer,
    EnumTransducer, IntegerTransducer, TokenTransducer,
};
use listbind::{
    ContextConfig, ListTransducedAccessor, Packer, Result, SerializationContext,
    TransducedAccessor, Transducer,
};
use rust_decimal::Decimal;

/// Prints `value`, parses the output into a fresh host and returns both.
fn round_trip<T, P>(transducer: T, packer: P, value: P::Sequence) -> Result<(String, P::Sequence)>
where
    T: Transducer,
    P: Packer<Item = T::Item>,
{
    let accessor = ListTransducedAccessor::new(transducer, SlotAccessor, packer);
    let mut ctx = SerializationContext::default();

    let lexical = accessor
        .print(&Slot::holding(value), &mut ctx)?
        .unwrap_or_default();
    assert!(!ctx.has_errors(), "unexpected errors: {:?}", ctx.errors());

    let mut host = Slot::empty();
    accessor.parse(&mut host, &lexical)?;
    assert_eq!(host.sets, 1);
    let parsed = host.value.unwrap_or_else(|| panic!("nothing committed for `{lexical}`"));
    Ok((lexical, parsed))
}

fn assert_round_trip<T, P>(transducer: T, packer: P, value: P::Sequence, expected: &str) -> Result<()>
where
    T: Transducer,
    P: Packer<Item = T::Item>,
    P::Sequence: Clone + PartialEq + Debug,
{
    let (lexical, parsed) = round_trip(transducer, packer, value.clone())?;
    assert_eq!(lexical, expected);
    assert_eq!(parsed, value);
    Ok(())
}

#[test]
fn test_vec_of_integers() -> Result<()> {
    assert_round_trip(
        IntegerTransducer::<i64>::new(),
        VecPacker::new(),
        vec![-9_223_372_036_854_775_808, 0, 42],
        "-9223372036854775808 0 42",
    )
}

#[test]
fn test_vec_of_unsigned_bytes_rejects_out_of_range() {
    let accessor =
        ListTransducedAccessor::new(IntegerTransducer::<u8>::new(), SlotAccessor, VecPacker::new());
    let mut host = Slot::empty();

    assert!(accessor.parse(&mut host, "0 255 256").is_err());
    assert_eq!(host.value, None);
}

#[test]
fn test_nullable_vec_of_tokens() -> Result<()> {
    let value = vec![Some("alpha".to_string()), None, Some("beta".to_string())];
    let (lexical, parsed) = round_trip(TokenTransducer::new(), NullableVecPacker::new(), value)?;

    // nulls are not written, so they do not come back
    assert_eq!(lexical, "alpha beta");
    assert_eq!(
        parsed,
        vec![Some("alpha".to_string()), Some("beta".to_string())]
    );
    Ok(())
}

#[test]
fn test_vec_deque_of_booleans() -> Result<()> {
    assert_round_trip(
        BooleanTransducer::new(),
        VecDequePacker::new(),
        VecDeque::from([true, false, true]),
        "true false true",
    )
}

#[test]
fn test_boolean_numeric_forms_print_canonically() -> Result<()> {
    let accessor =
        ListTransducedAccessor::new(BooleanTransducer::new(), SlotAccessor, VecDequePacker::new());
    let mut host = Slot::empty();
    let mut ctx = SerializationContext::default();

    accessor.parse(&mut host, "1 0\ttrue")?;
    assert_eq!(
        accessor.print(&host, &mut ctx)?,
        Some("true false true".to_string())
    );
    Ok(())
}

#[test]
fn test_boxed_slice_of_decimals() -> Result<()> {
    let value: Box<[Decimal]> = vec![
        Decimal::from_str("1.50").unwrap(),
        Decimal::from_str("-0.001").unwrap(),
        Decimal::from(12),
    ]
    .into_boxed_slice();

    assert_round_trip(
        DecimalTransducer::new(),
        BoxedSlicePacker::new(),
        value,
        "1.50 -0.001 12",
    )
}

#[test]
fn test_boxed_slice_of_dates() -> Result<()> {
    let value: Box<[NaiveDate]> = vec![
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
    ]
    .into_boxed_slice();

    assert_round_trip(
        DateTransducer::new(),
        BoxedSlicePacker::new(),
        value,
        "2024-02-29 1999-12-31",
    )
}

#[test]
fn test_shared_slice_of_date_times() -> Result<()> {
    let value: Arc<[_]> = Arc::from(vec![
        DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z").unwrap(),
        DateTime::parse_from_rfc3339("2024-01-02T03:04:05.250+02:00").unwrap(),
    ]);

    assert_round_trip(
        DateTimeTransducer::new(),
        SharedSlicePacker::new(),
        value,
        "2024-01-02T03:04:05Z 2024-01-02T03:04:05.250+02:00",
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Weekday {
    Monday,
    Friday,
    Sunday,
}

static WEEKDAYS: EnumTransducer<Weekday> = EnumTransducer::new(
    "Weekday",
    &[
        ("MON", Weekday::Monday),
        ("FRI", Weekday::Friday),
        ("SUN", Weekday::Sunday),
    ],
);

#[test]
fn test_shared_slice_of_enums() -> Result<()> {
    assert_round_trip(
        WEEKDAYS,
        SharedSlicePacker::new(),
        Arc::from(vec![Weekday::Sunday, Weekday::Monday, Weekday::Friday]),
        "SUN MON FRI",
    )
}

#[test]
fn test_doubles_keep_special_values() -> Result<()> {
    let accessor =
        ListTransducedAccessor::new(DoubleTransducer::new(), SlotAccessor, VecPacker::new());
    let mut host = Slot::empty();
    let mut ctx = SerializationContext::default();

    accessor.parse(&mut host, "INF -INF 1.5 NaN")?;
    let values = host.value.as_deref().unwrap_or_default();
    assert_eq!(values.len(), 4);
    assert!(values[3].is_nan());

    assert_eq!(
        accessor.print(&host, &mut ctx)?,
        Some("INF -INF 1.5 NaN".to_string())
    );
    assert!(accessor.parse(&mut host, "1.0 inf").is_err());
    Ok(())
}

#[test]
fn test_failed_parse_keeps_shared_slice() {
    let accessor = ListTransducedAccessor::new(WEEKDAYS, SlotAccessor, SharedSlicePacker::new());
    let original: Arc<[Weekday]> = Arc::from(vec![Weekday::Monday]);
    let mut host = Slot::holding(Arc::clone(&original));

    assert!(accessor.parse(&mut host, "FRI TUE").is_err());
    assert_eq!(host.sets, 0);
    assert!(host.value.as_ref().is_some_and(|v| Arc::ptr_eq(v, &original)));
}

#[test]
fn test_diagnostics_serialize_to_json() -> Result<()> {
    let config = ContextConfig::from_json_str(r#"{ "max_reported_errors": 1 }"#)
        .unwrap_or_else(|e| panic!("config rejected: {e}"));
    let accessor =
        ListTransducedAccessor::new(TokenTransducer::new(), SlotAccessor, VecPacker::new());
    let host = Slot::holding(vec!["ok".to_string(), "two words".to_string(), String::new()]);
    let mut ctx = SerializationContext::new(config);

    assert_eq!(accessor.print(&host, &mut ctx)?, Some("ok".to_string()));
    assert_eq!(ctx.dropped_errors(), 1);

    let json = serde_json::to_value(ctx.errors()).unwrap_or_default();
    let reports = json.as_array().map(Vec::len).unwrap_or_default();
    assert_eq!(reports, 1);
    assert_eq!(json[0]["field"], serde_json::Value::Null);
    assert!(json[0]["error"].as_str().is_some_and(|e| e.contains("two words")));
    Ok(())
}
