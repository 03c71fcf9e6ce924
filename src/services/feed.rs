use crate::domain::video::Video;
use crate::pagination::{FEED_PAGE_SIZE, Paginated, paginate};
use crate::repository::{VideoListQuery, VideoReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the video feed.
///
/// Fetches the whole catalog in insertion order and slices the requested
/// page out of it. `page` comes straight from the query string; anything
/// out of range is clamped by [`paginate`].
pub fn show_feed<R>(page: i64, repo: &R) -> ServiceResult<Paginated<Video>>
where
    R: VideoReader,
{
    let videos = match repo.list_videos(VideoListQuery::default()) {
        Ok(videos) => videos,
        Err(e) => {
            log::error!("Failed to list videos: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(paginate(videos, page, FEED_PAGE_SIZE))
}
