use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{TypeConstraintError, VideoAuthor, VideoTitle, ViewCount, YoutubeId};
use crate::domain::video::{NewVideo as DomainNewVideo, Video as DomainVideo};

/// Diesel model representing the `videos` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::videos)]
pub struct Video {
    pub id: i32,
    pub youtube_id: String,
    pub title: String,
    pub author: String,
    pub view_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Video`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::videos)]
pub struct NewVideo {
    pub youtube_id: String,
    pub title: String,
    pub author: String,
    pub view_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Video> for DomainVideo {
    type Error = TypeConstraintError;

    fn try_from(video: Video) -> Result<Self, Self::Error> {
        Ok(Self {
            id: video.id.try_into()?,
            youtube_id: YoutubeId::new(video.youtube_id)?,
            title: VideoTitle::new(video.title)?,
            author: VideoAuthor::new(video.author)?,
            view_count: ViewCount::new(video.view_count)?,
            created_at: video.created_at,
            updated_at: video.updated_at,
        })
    }
}

impl From<DomainNewVideo> for NewVideo {
    fn from(video: DomainNewVideo) -> Self {
        Self {
            youtube_id: video.youtube_id.into_inner(),
            title: video.title.into_inner(),
            author: video.author.into_inner(),
            view_count: video.view_count.get(),
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}
