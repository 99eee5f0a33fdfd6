use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

/// Storage format for every timestamp column
const DB_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local naive timestamp stored as sortable text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DbDateTime(pub NaiveDateTime);

impl FromSql for DbDateTime {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        String::column_result(value).and_then(|as_string| {
            parse_timestamp(&as_string).map(DbDateTime).ok_or_else(|| {
                FromSqlError::Other(format!("bad timestamp '{}'", as_string).into())
            })
        })
    }
}

impl ToSql for DbDateTime {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.format(DB_DATETIME_FORMAT).to_string()))
    }
}

/// Parse stored text, also accepting RFC 3339 and bare dates from older rows
fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, DB_DATETIME_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
