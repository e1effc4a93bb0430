//! ListRecordsHandler - generic query handler for paginated listings.

use crate::application::pagination::{paginate, Page, PageRequest};
use crate::domain::foundation::{DomainError, Entity};
use crate::ports::DynRecordStore;

/// Query for a page of records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRecordsQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ListRecordsQuery {
    /// Query for one specific page.
    pub fn paged(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

/// Handler for listing records of any entity type in insertion order.
pub struct ListRecordsHandler<T: Entity> {
    store: DynRecordStore<T>,
}

impl<T: Entity> ListRecordsHandler<T> {
    pub fn new(store: DynRecordStore<T>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListRecordsQuery) -> Result<Page<T>, DomainError> {
        let request = PageRequest::from_params(query.page, query.limit)?;
        let records = self.store.list().await?;
        Ok(paginate(records, &request))
    }
}
