//! Parameterized query execution
//!
//! Every statement the repositories and actions run goes through
//! [`QueryExecutor`]. Parameters are always bound positionally (`?`), never
//! formatted into the SQL text.

use chrono::NaiveDate;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, MySql, MySqlPool};

/// A positional statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Date(NaiveDate),
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<NaiveDate> for SqlParam {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

fn bind_query<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &'q [SqlParam],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(s) => query.bind(s.as_str()),
            SqlParam::Int(n) => query.bind(*n),
            SqlParam::Date(d) => query.bind(*d),
        };
    }
    query
}

fn bind_query_as<'q, T>(
    mut query: QueryAs<'q, MySql, T, MySqlArguments>,
    params: &'q [SqlParam],
) -> QueryAs<'q, MySql, T, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(s) => query.bind(s.as_str()),
            SqlParam::Int(n) => query.bind(*n),
            SqlParam::Date(d) => query.bind(*d),
        };
    }
    query
}

/// Runs statements against the shared pool
#[derive(Clone, Copy)]
pub struct QueryExecutor<'a> {
    pool: &'a MySqlPool,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch every row, decoded as `T`.
    pub async fn fetch_all<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        trace_statement(sql, params);
        bind_query_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_all(self.pool)
            .await
    }

    /// Fetch at most one row.
    pub async fn fetch_optional<T>(
        &self,
        sql: &str,
        params: &[SqlParam],
    ) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        trace_statement(sql, params);
        bind_query_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_optional(self.pool)
            .await
    }

    /// Fetch exactly one row; zero rows is `sqlx::Error::RowNotFound`.
    pub async fn fetch_one<T>(&self, sql: &str, params: &[SqlParam]) -> Result<T, sqlx::Error>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        trace_statement(sql, params);
        bind_query_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_one(self.pool)
            .await
    }

    /// Run a statement that returns no rows. Returns rows affected.
    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64, sqlx::Error> {
        trace_statement(sql, params);
        let result = bind_query(sqlx::query(sql), params)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn trace_statement(sql: &str, params: &[SqlParam]) {
    tracing::debug!(
        params = params.len(),
        sql = %sql.split_whitespace().collect::<Vec<_>>().join(" "),
        "executing statement"
    );
}
