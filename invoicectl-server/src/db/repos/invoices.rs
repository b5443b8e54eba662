//! Invoice repository
//!
//! Listing and search run a single JOIN against customers. Writes are single
//! autocommit statements; there are no multi-statement transactions.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, MySqlPool};

use super::{simulate_latency, CustomerField, CustomerRepo, DbError};
use crate::db::{QueryExecutor, SqlParam};
use crate::models::{total_pages, Cents, InvoiceId, InvoiceStatus, Pagination, ValidInvoice};

/// Number of rows in the latest-invoices panel
const LATEST_INVOICES_LIMIT: i64 = 5;

#[derive(Debug, FromRow)]
struct LatestInvoiceRow {
    id: String,
    name: String,
    image_url: String,
    email: String,
    #[sqlx(try_from = "i32")]
    amount: Cents,
}

/// Entry of the latest-invoices panel, amount already formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestInvoice {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: String,
}

impl From<LatestInvoiceRow> for LatestInvoice {
    fn from(row: LatestInvoiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            email: row.email,
            amount: row.amount.format_usd(),
        }
    }
}

/// Row of the searchable invoice table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicesTableRow {
    pub id: String,
    pub amount: Cents,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

// Status stays raw text here so one bad row cannot fail the whole page.
#[derive(Debug, FromRow)]
struct InvoicesTableRecord {
    id: String,
    #[sqlx(try_from = "i32")]
    amount: Cents,
    date: NaiveDate,
    status: String,
    name: String,
    email: String,
    image_url: String,
}

impl InvoicesTableRecord {
    /// Table row, or `None` (logged) when the stored status is unknown.
    fn into_row(self) -> Option<InvoicesTableRow> {
        match self.status.parse::<InvoiceStatus>() {
            Ok(status) => Some(InvoicesTableRow {
                id: self.id,
                amount: self.amount,
                date: self.date,
                status,
                name: self.name,
                email: self.email,
                image_url: self.image_url,
            }),
            Err(e) => {
                tracing::warn!(invoice_id = %self.id, error = %e, "skipping invoice with unknown status");
                None
            }
        }
    }
}

#[derive(Debug, FromRow)]
struct InvoiceRecord {
    id: String,
    customer_id: String,
    #[sqlx(try_from = "i32")]
    amount: Cents,
    #[sqlx(try_from = "String")]
    status: InvoiceStatus,
}

/// Invoice as loaded into the edit form, amount in major units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceForm {
    pub id: String,
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl From<InvoiceRecord> for InvoiceForm {
    fn from(record: InvoiceRecord) -> Self {
        Self {
            id: record.id,
            customer_id: record.customer_id,
            amount: record.amount.to_major(),
            status: record.status,
        }
    }
}

/// Everything the edit view needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceEditData {
    pub invoice: Option<InvoiceForm>,
    pub customers: Vec<CustomerField>,
}

/// One page of the invoice listing plus the page count for its query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceListing {
    pub query: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub invoices: Vec<InvoicesTableRow>,
}

#[derive(Debug, FromRow)]
struct Count {
    count: i64,
}

/// Search over customer name, email, amount, date and status; one page, newest first.
const FILTERED_INVOICES_SQL: &str = r#"
    SELECT
        invoices.id,
        invoices.amount,
        invoices.date,
        invoices.status,
        customers.name,
        customers.email,
        customers.image_url
    FROM invoices
    JOIN customers ON invoices.customer_id = customers.id
    WHERE
        LOWER(customers.name) LIKE ? ESCAPE '!' OR
        LOWER(customers.email) LIKE ? ESCAPE '!' OR
        CAST(invoices.amount AS CHAR) LIKE ? ESCAPE '!' OR
        CAST(invoices.date AS CHAR) LIKE ? ESCAPE '!' OR
        LOWER(invoices.status) LIKE ? ESCAPE '!'
    ORDER BY invoices.date DESC
    LIMIT ? OFFSET ?
"#;

/// Same predicate as [`FILTERED_INVOICES_SQL`], counted.
const INVOICES_COUNT_SQL: &str = r#"
    SELECT COUNT(*) AS count
    FROM invoices
    JOIN customers ON invoices.customer_id = customers.id
    WHERE
        LOWER(customers.name) LIKE ? ESCAPE '!' OR
        LOWER(customers.email) LIKE ? ESCAPE '!' OR
        CAST(invoices.amount AS CHAR) LIKE ? ESCAPE '!' OR
        CAST(invoices.date AS CHAR) LIKE ? ESCAPE '!' OR
        LOWER(invoices.status) LIKE ? ESCAPE '!'
"#;

/// Escape character declared on every search predicate (`LIKE ? ESCAPE '!'`).
///
/// Not a backslash, so the pattern means the same under `NO_BACKSLASH_ESCAPES`.
const LIKE_ESCAPE: char = '!';

/// Lowercase the search text and wrap it for a literal substring `LIKE`.
pub(crate) fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.to_lowercase().chars() {
        if matches!(ch, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// The same pattern once per searched column.
fn filter_params(query: &str) -> Vec<SqlParam> {
    let pattern = like_pattern(query);
    vec![SqlParam::Text(pattern); 5]
}

/// Invoice repository
pub struct InvoiceRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    fn exec(&self) -> QueryExecutor<'a> {
        QueryExecutor::new(self.pool)
    }

    /// Five most recent invoices with customer details.
    pub async fn fetch_latest_invoices(&self, delay: Duration) -> Result<Vec<LatestInvoice>, DbError> {
        simulate_latency(delay).await;

        let rows = self
            .exec()
            .fetch_all::<LatestInvoiceRow>(
                r#"
                SELECT invoices.amount, customers.name, customers.image_url, customers.email, invoices.id
                FROM invoices
                JOIN customers ON invoices.customer_id = customers.id
                ORDER BY invoices.date DESC
                LIMIT ?
                "#,
                &[SqlParam::Int(LATEST_INVOICES_LIMIT)],
            )
            .await
            .map_err(DbError::fetch("Failed to fetch the latest invoices."))?;

        Ok(rows.into_iter().map(LatestInvoice::from).collect())
    }

    /// One page of invoices whose customer name, email, amount, date or
    /// status contains `query`, case-insensitively. Newest first.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: Pagination,
    ) -> Result<Vec<InvoicesTableRow>, DbError> {
        let mut params = filter_params(query);
        params.push(SqlParam::Int(i64::from(page.limit())));
        params.push(SqlParam::Int(i64::try_from(page.offset()).unwrap_or(i64::MAX)));

        let records = self
            .exec()
            .fetch_all::<InvoicesTableRecord>(FILTERED_INVOICES_SQL, &params)
            .await
            .map_err(DbError::fetch("Failed to fetch invoices."))?;

        Ok(records.into_iter().filter_map(InvoicesTableRecord::into_row).collect())
    }

    /// Number of listing pages matching `query`.
    pub async fn fetch_invoices_pages(&self, query: &str, per_page: u32) -> Result<u32, DbError> {
        let count = self
            .exec()
            .fetch_one::<Count>(INVOICES_COUNT_SQL, &filter_params(query))
            .await
            .map_err(DbError::fetch("Failed to fetch total number of invoices."))?;

        Ok(total_pages(count.count, per_page))
    }

    /// The listing view: page count and the requested page, loaded concurrently.
    pub async fn fetch_listing(&self, query: &str, page: Pagination) -> Result<InvoiceListing, DbError> {
        let (total_pages, invoices) = tokio::try_join!(
            self.fetch_invoices_pages(query, page.per_page),
            self.fetch_filtered_invoices(query, page),
        )?;

        Ok(InvoiceListing {
            query: query.to_owned(),
            current_page: page.page,
            total_pages,
            invoices,
        })
    }

    /// Invoice by id for the edit form, `None` if no row matches.
    pub async fn fetch_invoice_by_id(&self, id: &InvoiceId) -> Result<Option<InvoiceForm>, DbError> {
        let record = self
            .exec()
            .fetch_optional::<InvoiceRecord>(
                r#"
                SELECT
                    invoices.id,
                    invoices.customer_id,
                    invoices.amount,
                    invoices.status
                FROM invoices
                WHERE invoices.id = ?
                "#,
                &[SqlParam::from(id.as_str())],
            )
            .await
            .map_err(DbError::fetch("Failed to fetch invoice."))?;

        Ok(record.map(InvoiceForm::from))
    }

    /// Invoice and customer list, loaded concurrently.
    pub async fn fetch_invoice_edit_data(&self, id: &InvoiceId) -> Result<InvoiceEditData, DbError> {
        let customers = CustomerRepo::new(self.pool);
        let (invoice, customers) =
            tokio::try_join!(self.fetch_invoice_by_id(id), customers.fetch_customers())?;

        Ok(InvoiceEditData { invoice, customers })
    }

    /// Insert a new invoice row.
    pub async fn insert(
        &self,
        id: &InvoiceId,
        invoice: &ValidInvoice,
        date: NaiveDate,
    ) -> Result<(), DbError> {
        self.exec()
            .execute(
                "INSERT INTO invoices (id, customer_id, amount, status, date) VALUES (?, ?, ?, ?, ?)",
                &[
                    SqlParam::from(id.as_str()),
                    SqlParam::from(invoice.customer_id.as_str()),
                    SqlParam::Int(invoice.amount.get()),
                    SqlParam::from(invoice.status.as_str()),
                    SqlParam::Date(date),
                ],
            )
            .await?;
        Ok(())
    }

    /// Overwrite customer, amount and status of an existing invoice.
    ///
    /// Returns rows affected; zero when the id does not exist.
    pub async fn update(&self, id: &InvoiceId, invoice: &ValidInvoice) -> Result<u64, DbError> {
        let affected = self
            .exec()
            .execute(
                "UPDATE invoices SET customer_id = ?, amount = ?, status = ? WHERE id = ?",
                &[
                    SqlParam::from(invoice.customer_id.as_str()),
                    SqlParam::Int(invoice.amount.get()),
                    SqlParam::from(invoice.status.as_str()),
                    SqlParam::from(id.as_str()),
                ],
            )
            .await?;
        Ok(affected)
    }

    /// Delete an invoice. Deleting a missing id affects zero rows.
    pub async fn delete(&self, id: &InvoiceId) -> Result<u64, DbError> {
        let affected = self
            .exec()
            .execute("DELETE FROM invoices WHERE id = ?", &[SqlParam::from(id.as_str())])
            .await?;
        Ok(affected)
    }
}
