//! The seam between per-entity definitions and the generic repository.
//!
//! Each entity module supplies its table, column list, statement templates and
//! parameter mapping; everything else (SQL execution, pagination, patching,
//! HTTP handling) is written once against this trait.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use sqlx::{FromRow, postgres::PgRow};
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    queries::{
        params::{NamedParams, SqlValue},
        repository::Repository,
        store::Storage,
    },
    validation::{Validate, validate_name, validate_non_negative},
};

/// Storage type of a patchable column, used to convert JSON patch values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Int,
    Float,
    Uuid,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ColumnKind::Text => "a string",
            ColumnKind::Int => "an integer",
            ColumnKind::Float => "a number",
            ColumnKind::Uuid => "a UUID string",
        };
        f.write_str(kind)
    }
}

pub trait Entity:
    for<'r> FromRow<'r, PgRow> + Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    /// Fields settable on insert.
    type Create: DeserializeOwned + Validate + Send + Sync;
    /// Fields replaced on a full update.
    type Update: DeserializeOwned + Validate + Send + Sync;

    /// Display name used in response descriptions, e.g. `Book`.
    const NAME: &'static str;
    /// Key of the record array in list responses, e.g. `books`.
    const PLURAL: &'static str;
    const TABLE: &'static str;
    /// Select list, in the order the record's `FromRow` expects.
    const COLUMNS: &'static str;
    /// Insert template using `:name` placeholders, including `:id`.
    const INSERT: &'static str;
    /// Full update template using `:name` placeholders, keyed on `:id`.
    const UPDATE: &'static str;
    const HAS_UPDATED_AT: bool = true;
    /// Columns a patch may touch. Empty means the entity cannot be patched.
    const PATCHABLE: &'static [(&'static str, ColumnKind)] = &[];

    fn create_params(id: Uuid, input: &Self::Create) -> NamedParams;

    fn update_params(id: Uuid, input: &Self::Update) -> NamedParams;

    /// Picks this entity's repository out of the store.
    fn repository(storage: &dyn Storage) -> &dyn Repository<Self>;
}

pub(crate) fn patch_column<E: Entity>(name: &str) -> Option<ColumnKind> {
    E::PATCHABLE
        .iter()
        .find(|(column, _)| *column == name)
        .map(|(_, kind)| *kind)
}

fn convert(name: &str, kind: ColumnKind, value: &Value) -> Result<SqlValue> {
    let invalid = || Error::Validation(format!("Field `{}` must be {}", name, kind));

    let converted = match kind {
        ColumnKind::Text => SqlValue::Text(value.as_str().ok_or_else(invalid)?.to_string()),
        ColumnKind::Int => {
            let number = value.as_i64().ok_or_else(invalid)?;
            SqlValue::Int(i32::try_from(number).map_err(|_| invalid())?)
        }
        ColumnKind::Float => SqlValue::Float(value.as_f64().ok_or_else(invalid)?),
        ColumnKind::Uuid => {
            let raw = value.as_str().ok_or_else(invalid)?;
            SqlValue::Uuid(Uuid::parse_str(raw).map_err(|_| invalid())?)
        }
    };

    match &converted {
        SqlValue::Text(text) if name == "name" => validate_name(text)?,
        SqlValue::Int(number) => validate_non_negative(name, *number)?,
        _ => {}
    }

    Ok(converted)
}

/// Converts a JSON patch body into typed parameters for `E`.
///
/// Rejects an empty body, columns outside `E::PATCHABLE` and values of the
/// wrong type.
pub fn patch_params<E: Entity>(fields: &Map<String, Value>) -> Result<NamedParams> {
    if fields.is_empty() {
        return Err(Error::Validation("no fields to update".to_string()));
    }

    let mut params = NamedParams::new();
    for (name, value) in fields {
        let kind = patch_column::<E>(name).ok_or_else(|| {
            Error::Validation(format!("Field `{}` cannot be patched on {}", name, E::NAME))
        })?;
        params.insert(name, convert(name, kind, value)?);
    }

    Ok(params)
}
