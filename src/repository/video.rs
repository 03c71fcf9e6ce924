use diesel::prelude::*;

use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{NewVideo, Video};
use crate::models::video::{NewVideo as DbNewVideo, Video as DbVideo};
use crate::models::video_category::NewVideoCategory;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, VideoListQuery, VideoReader, VideoWriter};

impl VideoReader for DieselRepository {
    fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<Vec<Video>> {
        use crate::schema::{video_categories, videos};

        let mut conn = self.conn()?;

        let mut items = videos::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_id) = query.category_id {
            items = items.filter(
                videos::id.eq_any(
                    video_categories::table
                        .filter(video_categories::category_id.eq(category_id.get()))
                        .select(video_categories::video_id),
                ),
            );
        }

        let items = items
            .order(videos::id.asc())
            .load::<DbVideo>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Video>, _>>()?;

        Ok(items)
    }

    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        use crate::schema::videos;

        let mut conn = self.conn()?;

        let video = videos::table
            .filter(videos::id.eq(id.get()))
            .first::<DbVideo>(&mut conn)
            .optional()?;

        let video = video.map(TryInto::try_into).transpose()?;
        Ok(video)
    }
}

impl VideoWriter for DieselRepository {
    fn create_video(&self, video: &NewVideo) -> RepositoryResult<Video> {
        use crate::schema::videos;

        let mut conn = self.conn()?;
        let db_video: DbNewVideo = video.clone().into();

        let created = diesel::insert_into(videos::table)
            .values(db_video)
            .get_result::<DbVideo>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn add_video_to_category(
        &self,
        video_id: VideoId,
        category_id: CategoryId,
    ) -> RepositoryResult<usize> {
        use crate::schema::video_categories;

        let mut conn = self.conn()?;

        let affected = diesel::insert_into(video_categories::table)
            .values(NewVideoCategory {
                video_id: video_id.get(),
                category_id: category_id.get(),
            })
            .on_conflict_do_nothing()
            .execute(&mut conn)?;

        Ok(affected)
    }
}
