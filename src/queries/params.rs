//! Named statement parameters.
//!
//! Statement templates are written with `:name` placeholders and rewritten into
//! PostgreSQL's positional `$n` form together with an argument list in the
//! same order. Inserts, full updates and patches all go through this path, so
//! a patch touching an arbitrary subset of columns is bound the same way as a
//! fixed update.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::{Postgres, postgres::PgArguments, query::Query};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("no value supplied for parameter `:{0}`")]
    MissingParam(String),
}

/// A value bound to a statement at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    Float(f64),
    Uuid(Uuid),
}

impl SqlValue {
    pub fn bind<'q>(
        self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        match self {
            SqlValue::Text(value) => query.bind(value),
            SqlValue::Int(value) => query.bind(value),
            SqlValue::Float(value) => query.bind(value),
            SqlValue::Uuid(value) => query.bind(value),
        }
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<Uuid> for SqlValue {
    fn from(value: Uuid) -> Self {
        SqlValue::Uuid(value)
    }
}

/// Mapping from placeholder name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamedParams(BTreeMap<String, SqlValue>);

impl NamedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<SqlValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<SqlValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Builds the `NamedParams` for an insert or full update: `:id` plus one
/// entry per listed field of `$input`, named after the field.
macro_rules! named_params {
    ($id:expr, $input:expr; $($field:ident),+ $(,)?) => {
        $crate::queries::params::NamedParams::new()
            .with("id", $id)
            $(.with(stringify!($field), $input.$field.clone()))+
    };
}

pub(crate) use named_params;

/// A statement in positional form with its ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Positional {
    pub sql: String,
    pub args: Vec<SqlValue>,
}

impl Positional {
    /// Builds an executable query with every argument bound in order.
    pub fn query(&self) -> Query<'_, Postgres, PgArguments> {
        self.args
            .iter()
            .cloned()
            .fold(sqlx::query(&self.sql), |query, value| value.bind(query))
    }
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Rewrites `:name` placeholders into `$1..$n`.
///
/// Positions are assigned in first-seen order and a repeated name reuses its
/// position. `::type` casts and single-quoted literals are left untouched.
/// Entries in `params` that the template never references are ignored.
pub fn to_positional(template: &str, params: &NamedParams) -> Result<Positional, TemplateError> {
    let bytes = template.as_bytes();
    let mut sql = String::with_capacity(template.len() + 8);
    let mut names: Vec<&str> = Vec::new();
    let mut args = Vec::new();
    let mut in_literal = false;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' => in_literal = !in_literal,
            b':' if !in_literal => {
                if bytes.get(i + 1) == Some(&b':') {
                    i += 2;
                    continue;
                }

                let start = i + 1;
                let mut end = start;
                if end < bytes.len() && is_ident_start(bytes[end]) {
                    end += 1;
                    while end < bytes.len() && is_ident_continue(bytes[end]) {
                        end += 1;
                    }
                }

                if end > start {
                    let name = &template[start..end];
                    let position = match names.iter().position(|seen| *seen == name) {
                        Some(index) => index + 1,
                        None => {
                            let value = params
                                .get(name)
                                .ok_or_else(|| TemplateError::MissingParam(name.to_string()))?;
                            names.push(name);
                            args.push(value.clone());
                            names.len()
                        }
                    };

                    sql.push_str(&template[copied..i]);
                    sql.push('$');
                    sql.push_str(&position.to_string());
                    copied = end;
                    i = end;
                    continue;
                }
            }
            _ => {}
        }
        i += 1;
    }

    sql.push_str(&template[copied..]);
    Ok(Positional { sql, args })
}
