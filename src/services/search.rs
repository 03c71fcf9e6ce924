use std::collections::HashSet;

use crate::domain::video::Video;
use crate::repository::{VideoListQuery, VideoReader};

use super::{ServiceError, ServiceResult};

/// Multi-term search over a fetched video collection.
///
/// The query is tokenized on whitespace and a video matches when ANY term is
/// a case-insensitive substring of its title or its author. Multi-word
/// queries therefore broaden the result set rather than narrowing it. The
/// result is distinct by video id and keeps the input order. An empty or
/// whitespace-only query matches nothing.
pub fn search_videos(query: &str, videos: &[Video]) -> Vec<Video> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut matches = Vec::new();
    for video in videos {
        let title = video.title.as_str().to_lowercase();
        let author = video.author.as_str().to_lowercase();
        let is_match = terms
            .iter()
            .any(|term| title.contains(term) || author.contains(term));
        if is_match && seen.insert(video.id) {
            matches.push(video.clone());
        }
    }
    matches
}

/// Core business logic for the search page: fetches the catalog and applies
/// [`search_videos`]. The repository is not consulted when the query holds
/// no terms.
pub fn show_search<R>(query: &str, repo: &R) -> ServiceResult<Vec<Video>>
where
    R: VideoReader,
{
    if query.split_whitespace().next().is_none() {
        return Ok(Vec::new());
    }

    match repo.list_videos(VideoListQuery::default()) {
        Ok(videos) => Ok(search_videos(query, &videos)),
        Err(e) => {
            log::error!("Failed to list videos: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{VideoAuthor, VideoId, VideoTitle, ViewCount, YoutubeId};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_video(id: i32, title: &str, author: &str) -> Video {
        Video {
            id: VideoId::new(id).unwrap(),
            youtube_id: YoutubeId::new("dQw4w9WgXcQ").unwrap(),
            title: VideoTitle::new(title).unwrap(),
            author: VideoAuthor::new(author).unwrap(),
            view_count: ViewCount::new(0).unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn catalog() -> Vec<Video> {
        vec![
            sample_video(1, "Intro to Go", "Alice"),
            sample_video(2, "Rust Basics", "Bob"),
            sample_video(3, "Advanced Go", "Carol"),
        ]
    }

    #[test]
    fn matches_title_substrings_case_insensitively() {
        let results = search_videos("go", &catalog());

        let ids: Vec<i32> = results.iter().map(|v| v.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn any_term_matching_title_or_author_includes_the_video() {
        let results = search_videos("alice rust", &catalog());

        let ids: Vec<i32> = results.iter().map(|v| v.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn multi_term_result_is_the_union_of_single_terms() {
        let videos = catalog();
        let combined: Vec<i32> = search_videos("go bob", &videos)
            .iter()
            .map(|v| v.id.get())
            .collect();

        let mut union: Vec<i32> = search_videos("go", &videos)
            .iter()
            .chain(search_videos("bob", &videos).iter())
            .map(|v| v.id.get())
            .collect();
        union.sort_unstable();
        union.dedup();

        let mut combined_sorted = combined.clone();
        combined_sorted.sort_unstable();
        assert_eq!(combined_sorted, union);
    }

    #[test]
    fn videos_matching_several_terms_appear_once() {
        let videos = vec![sample_video(1, "Go for Go-getters", "Gordon")];

        let results = search_videos("go gordon", &videos);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(search_videos("", &catalog()).is_empty());
        assert!(search_videos("   \t ", &catalog()).is_empty());
    }

    #[test]
    fn blank_query_does_not_hit_the_repository() {
        let repo = TestRepository::new(vec![], catalog());

        let results = show_search("  ", &repo).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn show_search_filters_the_stored_catalog() {
        let repo = TestRepository::new(vec![], catalog());

        let results = show_search("basics", &repo).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title.as_str(), "Rust Basics");
    }
}
