use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{TypeConstraintError, VideoAuthor, VideoTitle, ViewCount, YoutubeId};
use crate::domain::video::NewVideo;

/// Raw add-video submission as it arrives from the category page form.
#[derive(Deserialize, Validate)]
pub struct AddVideoForm {
    #[validate(length(min = 1))]
    pub youtube_id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(range(min = 0))]
    pub view_count: i32,
}

/// Validated, strongly-typed add-video submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AddVideoFormPayload {
    pub youtube_id: YoutubeId,
    pub title: VideoTitle,
    pub author: VideoAuthor,
    pub view_count: ViewCount,
}

impl AddVideoFormPayload {
    pub fn into_new_video(self) -> NewVideo {
        let now = Utc::now().naive_utc();
        NewVideo {
            youtube_id: self.youtube_id,
            title: self.title,
            author: self.author,
            view_count: self.view_count,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddVideoFormError {
    #[error("Add video form validation failed: {0}")]
    Validation(String),
    #[error("Add video form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddVideoFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddVideoFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddVideoForm> for AddVideoFormPayload {
    type Error = AddVideoFormError;

    fn try_from(value: AddVideoForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            youtube_id: YoutubeId::new(value.youtube_id)?,
            title: VideoTitle::new(value.title)?,
            author: VideoAuthor::new(value.author)?,
            view_count: ViewCount::new(value.view_count)?,
        })
    }
}
