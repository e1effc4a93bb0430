//! Generic record handlers.
//!
//! The plain fetch/list/remove operations behave identically for every
//! entity type, so they are implemented once over `RecordStore<T>` and
//! instantiated per store at wiring time. Anything entity-specific
//! (validation, uniqueness, filters, workflow) lives in the sibling
//! modules.

mod get_record;
mod list_records;
mod remove_record;

pub use get_record::GetRecordHandler;
pub use list_records::{ListRecordsHandler, ListRecordsQuery};
pub use remove_record::RemoveRecordHandler;
