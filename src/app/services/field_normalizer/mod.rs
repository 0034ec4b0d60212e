//! Field normalizer for EDT export cells
//!
//! Pure conversions from the strings EDT writes into structured values:
//!
//! - "07h55" → 07:55 ([`parse_time`])
//! - "2h00" → 100 minutes with 50 minute lesson units ([`parse_duration`])
//! - "lunedì 07h55" → (1, 07:55), "Non piazzata" → `None` ([`parse_day_and_time`])
//! - "Settimana 49" → 49, "" → `None` ([`parse_week`])
//!
//! Malformed mandatory tokens fail with [`EdtError::InvalidFormat`](crate::EdtError::InvalidFormat)
//! carrying the offending token. No function here performs I/O or logs.
//!
//! ## Usage
//!
//! ```rust
//! use edt_parser::app::services::field_normalizer::{add_minutes, parse_day_and_time, parse_duration};
//!
//! # fn example() -> edt_parser::Result<()> {
//! if let Some((day, start)) = parse_day_and_time("martedì 12h05")? {
//!     let end = add_minutes(start, parse_duration("1h00")?);
//!     assert_eq!((day, end.to_string()), (2, "12:55".to_string()));
//! }
//! # Ok(())
//! # }
//! ```

pub mod parsers;

#[cfg(test)]
pub mod tests;

pub use parsers::{
    add_minutes, parse_day_and_time, parse_duration, parse_duration_with_unit, parse_time,
    parse_week,
};
