//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod ids;
pub mod money;
pub mod invoice;
pub mod form;
pub mod pagination;

pub use validation::ValidationError;
pub use ids::{CustomerId, InvoiceId};
pub use money::Cents;
pub use invoice::InvoiceStatus;
pub use form::{FieldErrors, FormState, InvoiceFields, ValidInvoice};
pub use pagination::{total_pages, ListingParams, Pagination, INVOICES_PER_PAGE};
