use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{NewVideo, Video};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
#[cfg(test)]
pub mod test;
pub mod video;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing videos.
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoListQuery {
    /// Restrict to videos associated with a category.
    pub category_id: Option<CategoryId>,
}

impl VideoListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by name, compared case-insensitively.
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored record.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations for video entities.
pub trait VideoReader {
    /// List videos matching the supplied query parameters, oldest first.
    fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<Vec<Video>>;
    /// Retrieve a video by its identifier.
    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>>;
}

/// Write operations for video entities and their category associations.
pub trait VideoWriter {
    /// Persist a new video and return the stored record.
    fn create_video(&self, video: &NewVideo) -> RepositoryResult<Video>;
    /// Associate a video with a category. Adding an existing association is
    /// a no-op.
    fn add_video_to_category(
        &self,
        video_id: VideoId,
        category_id: CategoryId,
    ) -> RepositoryResult<usize>;
}
