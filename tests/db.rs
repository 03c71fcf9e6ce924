use diesel::prelude::*;
use video_collector::schema::{categories, video_categories, videos};

mod common;

#[test]
fn migrations_create_the_catalog_tables() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let mut conn = pool.get().expect("should get a pooled connection");

    // A freshly migrated catalog has all three tables, each empty.
    let category_count: i64 = categories::table
        .count()
        .get_result(&mut conn)
        .expect("categories table should exist");
    assert_eq!(category_count, 0);

    let video_count: i64 = videos::table
        .count()
        .get_result(&mut conn)
        .expect("videos table should exist");
    assert_eq!(video_count, 0);

    let link_count: i64 = video_categories::table
        .count()
        .get_result(&mut conn)
        .expect("video_categories table should exist");
    assert_eq!(link_count, 0);
}
