//! Registration form schema.
//!
//! The rules live in one table ([`SCHEMA`]) and are checked before any
//! request goes out, so every front end validates the same way.
use crate::calc::round_tenth;
use std::fmt;
use thiserror::Error;

/// Upper bound of a desired yield; the form steps by 0.1 below 100%.
pub const MAX_DESIRED_YIELD: f64 = 99.9;

/// Length of a ticker code.
pub const STOCK_CODE_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Brand,
    StockCode,
    DesiredYield,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Brand => "brand",
            Field::StockCode => "stockCode",
            Field::DesiredYield => "desiredYield",
        };
        f.write_str(name)
    }
}

/// A single check against one field's raw text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    NonEmpty,
    Length(usize),
    Digits,
    Number,
    Min(f64),
    Max(f64),
}

impl Rule {
    fn check(&self, raw: &str) -> bool {
        match *self {
            Rule::NonEmpty => !raw.trim().is_empty(),
            Rule::Length(len) => raw.chars().count() == len,
            Rule::Digits => raw.chars().all(|c| c.is_ascii_digit()),
            Rule::Number => parse_number(raw).is_some(),
            Rule::Min(min) => parse_number(raw).is_some_and(|n| n >= min),
            Rule::Max(max) => parse_number(raw).is_some_and(|n| n <= max),
        }
    }
}

/// The form schema: per field, the rules in the order they are checked & the
/// message shown when one fails.
pub const SCHEMA: &[(Field, &[(Rule, &str)])] = &[
    (Field::Brand, &[(Rule::NonEmpty, "enter a brand name")]),
    (
        Field::StockCode,
        &[
            (Rule::Length(STOCK_CODE_LEN), "enter a 4-digit code"),
            (Rule::Digits, "enter a 4-digit code"),
        ],
    ),
    (
        Field::DesiredYield,
        &[
            (Rule::Number, "enter a number"),
            (Rule::Min(0.0), "must be 0 or more"),
            (Rule::Max(MAX_DESIRED_YIELD), "must be less than 100"),
        ],
    ),
];

/// An empty yield box means "decide later", i.e. 0.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub brand: String,
    pub stock_code: String,
    pub desired_yield: String,
}

/// Form input that passed [`SCHEMA`]. The desired yield is kept to the
/// form's 0.1 step.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub brand: String,
    pub stock_code: String,
    pub desired_yield: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed, with the first failing rule's message.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid registration: {}", display_list(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn display_list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl RegistrationForm {
    pub fn new(brand: &str, stock_code: &str, desired_yield: &str) -> Self {
        Self {
            brand: brand.to_string(),
            stock_code: stock_code.to_string(),
            desired_yield: desired_yield.to_string(),
        }
    }

    fn raw(&self, field: Field) -> &str {
        match field {
            Field::Brand => &self.brand,
            Field::StockCode => &self.stock_code,
            Field::DesiredYield => &self.desired_yield,
        }
    }

    pub fn validate(&self) -> Result<Registration, ValidationErrors> {
        let errors = SCHEMA
            .iter()
            .filter_map(|(field, rules)| {
                let raw = self.raw(*field);
                rules
                    .iter()
                    .find(|(rule, _)| !rule.check(raw))
                    .map(|(_, message)| FieldError {
                        field: *field,
                        message: *message,
                    })
            })
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(Registration {
            brand: self.brand.trim().to_string(),
            stock_code: self.stock_code.clone(),
            desired_yield: parse_number(&self.desired_yield)
                .map(round_tenth)
                .unwrap_or_default(),
        })
    }
}
