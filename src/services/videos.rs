use crate::domain::types::VideoId;
use crate::domain::video::Video;
use crate::repository::VideoReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for the playback page: look a video up by its raw id.
pub fn show_video<R>(video_id: i32, repo: &R) -> ServiceResult<Video>
where
    R: VideoReader,
{
    let video_id = match VideoId::new(video_id) {
        Ok(video_id) => video_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_video_by_id(video_id) {
        Ok(Some(video)) => Ok(video),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video by id: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{VideoAuthor, VideoTitle, ViewCount, YoutubeId};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_video(id: i32) -> Video {
        Video {
            id: VideoId::new(id).unwrap(),
            youtube_id: YoutubeId::new("dQw4w9WgXcQ").unwrap(),
            title: VideoTitle::new("Intro to Go").unwrap(),
            author: VideoAuthor::new("Alice").unwrap(),
            view_count: ViewCount::new(0).unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn returns_the_stored_video() {
        let repo = TestRepository::new(vec![], vec![sample_video(1)]);

        let video = show_video(1, &repo).unwrap();
        assert_eq!(video.id, 1);
    }

    #[test]
    fn missing_or_invalid_ids_are_not_found() {
        let repo = TestRepository::new(vec![], vec![sample_video(1)]);

        assert!(matches!(
            show_video(2, &repo).unwrap_err(),
            ServiceError::NotFound
        ));
        assert!(matches!(
            show_video(0, &repo).unwrap_err(),
            ServiceError::NotFound
        ));
    }
}
