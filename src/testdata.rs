//! Ad-hoc test-data generation.
//!
//! Given a list of named, typed fields, produces rows of plausible random
//! values: names and addresses from small fixed pools, valid-looking emails
//! and dates, digit strings for phones, and so on. Values are strings across
//! the board since they land in a table or a CSV-ish copy/paste, not in a
//! typed pipeline.

use crate::error::{CasegenError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Michael", "Emily", "David", "Sarah", "Alex", "Olivia", "Daniel", "Sophia",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Brown", "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris",
    "Martin",
];
const STREETS: [&str; 5] = ["Main St", "Oak Ave", "Pine Rd", "Maple Dr", "Cedar Ln"];
const CITIES: [&str; 6] = [
    "New York",
    "San Francisco",
    "London",
    "Sydney",
    "Toronto",
    "Berlin",
];
const COUNTRIES: [&str; 5] = ["USA", "UK", "Australia", "Canada", "Germany"];

const STRING_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The kinds of values the generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Integer,
    Decimal,
    Email,
    Phone,
    Date,
    Name,
    Address,
}

/// All field types, in the order they are offered to users.
pub const FIELD_TYPES: [FieldType; 9] = [
    FieldType::String,
    FieldType::Number,
    FieldType::Integer,
    FieldType::Decimal,
    FieldType::Email,
    FieldType::Phone,
    FieldType::Date,
    FieldType::Name,
    FieldType::Address,
];

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Decimal => "decimal",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Date => "date",
            FieldType::Name => "name",
            FieldType::Address => "address",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FieldType {
    type Err = CasegenError;

    fn from_str(s: &str) -> Result<Self> {
        FIELD_TYPES
            .iter()
            .find(|t| t.name() == s.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| {
                CasegenError::InvalidFieldSpec(format!(
                    "unknown type '{}' (valid: {})",
                    s,
                    FIELD_TYPES.map(|t| t.name()).join(", ")
                ))
            })
    }
}

/// A named field to generate values for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldSpec {
    /// Parse `name:type` CLI syntax; a bare `name` infers the type from the
    /// name itself.
    pub fn parse(spec: &str) -> Result<Self> {
        let (name, field_type) = match spec.split_once(':') {
            Some((name, type_name)) => (name.trim(), type_name.trim().parse()?),
            None => (spec.trim(), suggest_type_for_name(spec.trim())),
        };
        if name.is_empty() {
            return Err(CasegenError::InvalidFieldSpec(format!(
                "'{}': field name is required",
                spec
            )));
        }
        Ok(FieldSpec {
            name: name.to_string(),
            field_type,
        })
    }
}

/// Guess a field type from its name. First matching rule wins.
pub fn suggest_type_for_name(name: &str) -> FieldType {
    let n = name.to_lowercase();
    if n.contains("phone") || n.contains("tel") {
        FieldType::Phone
    } else if n.contains("email") || n.contains("e-mail") {
        FieldType::Email
    } else if n.contains("name") {
        FieldType::Name
    } else if n.contains("date") || n.contains("dob") {
        FieldType::Date
    } else if n.contains("addr") {
        FieldType::Address
    } else if n.contains("id") || n.contains("count") || n.contains("number") {
        FieldType::Integer
    } else {
        FieldType::String
    }
}

/// Generate one random value for a field.
///
/// `row` feeds into email suffixes so a column of emails stays mostly unique
/// across rows.
pub fn generate_value(field_type: FieldType, name: &str, row: usize, rng: &mut impl Rng) -> String {
    match field_type {
        FieldType::Name => {
            format!("{} {}", sample(rng, &FIRST_NAMES), sample(rng, &LAST_NAMES))
        }
        FieldType::Email => {
            let local = email_local_part(name);
            let suffix = row + rng.gen_range(1..=999);
            format!("{}.{}@example.com", local, suffix)
        }
        FieldType::Phone => (0..10)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect(),
        FieldType::Date => format!(
            "{:04}-{:02}-{:02}",
            rng.gen_range(1970..=2023),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28)
        ),
        FieldType::Address => format!(
            "{} {} {}, {}, {}",
            rng.gen_range(1..=9999),
            sample(rng, &STREETS),
            rng.gen_range(1..=999),
            sample(rng, &CITIES),
            sample(rng, &COUNTRIES)
        ),
        FieldType::Integer | FieldType::Number => rng.gen_range(1..=10000).to_string(),
        FieldType::Decimal => {
            let digits = rng.gen_range(2..=3usize);
            format!("{:.*}", digits, rng.gen_range(0.0..10000.0f64))
        }
        FieldType::String => {
            let len = rng.gen_range(5..=15);
            (0..len)
                .map(|_| char::from(STRING_CHARSET[rng.gen_range(0..STRING_CHARSET.len())]))
                .collect()
        }
    }
}

/// Generate `count` rows of values, one value per field in order.
pub fn generate_rows(fields: &[FieldSpec], count: usize) -> Result<Vec<Vec<String>>> {
    for (i, field) in fields.iter().enumerate() {
        if field.name.trim().is_empty() {
            return Err(CasegenError::InvalidFieldSpec(format!(
                "field {}: name is required",
                i + 1
            )));
        }
    }

    let mut rng = rand::thread_rng();
    Ok((0..count)
        .map(|row| {
            fields
                .iter()
                .map(|f| generate_value(f.field_type, &f.name, row, &mut rng))
                .collect()
        })
        .collect())
}

fn sample<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Lowercase the field name and reduce it to a dot-separated local part.
fn email_local_part(name: &str) -> String {
    let mut local = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            local.extend(c.to_lowercase());
        } else if !local.ends_with('.') && !local.is_empty() {
            local.push('.');
        }
    }
    let local = local.trim_end_matches('.');
    if local.is_empty() {
        "user".to_string()
    } else {
        local.to_string()
    }
}
