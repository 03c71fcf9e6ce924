use crate::domain::category::Category;
use crate::domain::video::Video;
use crate::forms::videos::{AddVideoForm, AddVideoFormPayload};
use crate::repository::{CategoryReader, VideoListQuery, VideoReader, VideoWriter};
use crate::services::CARDS_PER_ROW;

use super::{ServiceError, ServiceResult, chunk_rows};

/// Core business logic for rendering a category page.
///
/// Looks the category up by name (case-insensitively) and fetches its videos
/// arranged into rows for the card layout.
pub fn show_category<R>(name: &str, repo: &R) -> ServiceResult<(Category, Vec<Vec<Video>>)>
where
    R: CategoryReader + VideoReader,
{
    let category = match repo.get_category_by_name(name) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category by name: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let videos = match repo.list_videos(VideoListQuery::default().category(category.id)) {
        Ok(videos) => videos,
        Err(e) => {
            log::error!("Failed to list videos for category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok((category, chunk_rows(videos, CARDS_PER_ROW)))
}

/// Validates an add-video submission, creates the video and links it to the
/// named category. Returns the stored video; validation failures surface as
/// [`ServiceError::Form`].
pub fn add_video<R>(category_name: &str, form: AddVideoForm, repo: &R) -> ServiceResult<Video>
where
    R: CategoryReader + VideoWriter,
{
    let category = match repo.get_category_by_name(category_name) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category by name: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let payload: AddVideoFormPayload = form.try_into()?;

    let video = match repo.create_video(&payload.into_new_video()) {
        Ok(video) => video,
        Err(e) => {
            log::error!("Failed to create video: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if let Err(e) = repo.add_video_to_category(video.id, category.id) {
        log::error!("Failed to associate video with category: {e}");
        return Err(ServiceError::Internal);
    }

    Ok(video)
}
