use crate::domain::category::Category;
use crate::repository::CategoryReader;
use crate::services::CARDS_PER_ROW;

use super::{ServiceError, ServiceResult, chunk_rows};

/// Core business logic for rendering the home page.
///
/// Fetches every category and arranges them into rows for the card layout.
/// Repository errors are translated into `ServiceError` so that the HTTP
/// route can remain a thin wrapper.
pub fn show_home<R>(repo: &R) -> ServiceResult<Vec<Vec<Category>>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(chunk_rows(categories, CARDS_PER_ROW)),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}
