use diesel::prelude::*;

/// Insertable row linking a video to a category.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::video_categories)]
pub struct NewVideoCategory {
    pub video_id: i32,
    pub category_id: i32,
}
