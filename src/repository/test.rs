use chrono::Utc;

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{NewVideo, Video};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, VideoListQuery, VideoReader, VideoWriter};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    categories: Vec<Category>,
    videos: Vec<Video>,
    links: Vec<(VideoId, CategoryId)>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, videos: Vec<Video>) -> Self {
        Self {
            categories,
            videos,
            links: Vec::new(),
        }
    }

    pub fn with_links(mut self, links: Vec<(VideoId, CategoryId)>) -> Self {
        self.links = links;
        self
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        Ok(self
            .categories
            .iter()
            .find(|c| c.name.as_str().eq_ignore_ascii_case(name))
            .cloned())
    }
}

impl VideoReader for TestRepository {
    fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<Vec<Video>> {
        let mut items = self.videos.clone();
        if let Some(category_id) = query.category_id {
            items.retain(|v| {
                self.links
                    .iter()
                    .any(|(video_id, linked)| *video_id == v.id && *linked == category_id)
            });
        }
        Ok(items)
    }

    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        Ok(self.videos.iter().find(|v| v.id == id).cloned())
    }
}

impl VideoWriter for TestRepository {
    fn create_video(&self, video: &NewVideo) -> RepositoryResult<Video> {
        let now = Utc::now().naive_utc();
        Ok(Video {
            id: VideoId::new(self.videos.len() as i32 + 1)?,
            youtube_id: video.youtube_id.clone(),
            title: video.title.clone(),
            author: video.author.clone(),
            view_count: video.view_count,
            created_at: now,
            updated_at: now,
        })
    }

    fn add_video_to_category(
        &self,
        _video_id: VideoId,
        _category_id: CategoryId,
    ) -> RepositoryResult<usize> {
        Ok(1)
    }
}
