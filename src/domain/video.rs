use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{VideoAuthor, VideoId, VideoTitle, ViewCount, YoutubeId};

/// A cataloged video linked to YouTube.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub youtube_id: YoutubeId,
    pub title: VideoTitle,
    pub author: VideoAuthor,
    pub view_count: ViewCount,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Video`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewVideo {
    pub youtube_id: YoutubeId,
    pub title: VideoTitle,
    pub author: VideoAuthor,
    pub view_count: ViewCount,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
