use core::fmt::Display;
use core::str::FromStr;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use restopos_core::DomainError;

use crate::{LoadError, LoadResult};

/// A data row addressed by header name.
pub(crate) struct Row<'r> {
    number: usize,
    headers: &'r StringRecord,
    record: &'r StringRecord,
}

impl<'r> Row<'r> {
    /// Raw cell text, untrimmed.
    pub(crate) fn text(&self, column: &'static str) -> LoadResult<&'r str> {
        self.headers
            .iter()
            .position(|header| header.trim() == column)
            .and_then(|idx| self.record.get(idx))
            .ok_or(LoadError::MissingColumn {
                row: self.number,
                column,
            })
    }

    pub(crate) fn parse<T>(&self, column: &'static str) -> LoadResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.text(column)?;
        raw.trim()
            .parse::<T>()
            .map_err(|e| self.invalid(column, raw, e.to_string()))
    }

    /// Only the exact literal `True` is true; anything else is false.
    pub(crate) fn flag(&self, column: &'static str) -> LoadResult<bool> {
        Ok(self.text(column)? == "True")
    }

    pub(crate) fn invalid(&self, column: &'static str, value: &str, reason: String) -> LoadError {
        LoadError::InvalidValue {
            row: self.number,
            column,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn domain(&self, source: DomainError) -> LoadError {
        LoadError::Domain {
            row: self.number,
            source,
        }
    }
}

/// Read a headed CSV stream and build one value per data row.
pub(crate) fn read_rows<R, T, F>(reader: R, mut build: F) -> LoadResult<Vec<T>>
where
    R: Read,
    F: FnMut(&Row<'_>) -> LoadResult<T>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut out = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = Row {
            number: idx + 1,
            headers: &headers,
            record: &record,
        };
        out.push(build(&row)?);
    }
    Ok(out)
}
