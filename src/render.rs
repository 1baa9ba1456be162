//! Pure data -> view-model mapping shared by the admin panel and the public site.

use serde::Serialize;

use crate::content::{PhotoSlot, Project, ProjectId};
use crate::public::dto::CategoryFilter;

/// Display name for a category; unknown categories are shown verbatim.
pub fn category_name(category: &str) -> &str {
    match category {
        "web" => "Web Development",
        "mobile" => "Mobile Apps",
        "design" => "Design",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub category: String,
    pub category_name: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

pub fn project_card(p: &Project) -> ProjectCard {
    ProjectCard {
        id: p.id,
        category: p.category.clone(),
        category_name: category_name(&p.category).to_string(),
        title: p.title.clone(),
        description: p.description.clone(),
        image: p.image.clone(),
        technologies: p.technologies.clone(),
        live_url: p.live_url.clone(),
        github_url: p.github_url.clone(),
    }
}

/// Admin list: an empty collection gets its own view rather than an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "cards", rename_all = "lowercase")]
pub enum AdminListView {
    Empty,
    Cards(Vec<ProjectCard>),
}

pub fn admin_list(projects: &[Project]) -> AdminListView {
    if projects.is_empty() {
        AdminListView::Empty
    } else {
        AdminListView::Cards(projects.iter().map(project_card).collect())
    }
}

/// One generation of the public projects grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectGrid {
    pub filter: CategoryFilter,
    pub limit: usize,
    pub matching: usize,
    pub cards: Vec<ProjectCard>,
    pub show_load_more: bool,
}

pub fn project_grid(projects: &[Project], filter: &CategoryFilter, limit: usize) -> ProjectGrid {
    let matching: Vec<&Project> = projects.iter().filter(|p| filter.matches(p)).collect();
    ProjectGrid {
        filter: filter.clone(),
        limit,
        matching: matching.len(),
        show_load_more: matching.len() > limit,
        cards: matching.into_iter().take(limit).map(project_card).collect(),
    }
}

/// Image shown next to a photo URL field, with the slot's fallback if it fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoPreview {
    pub slot: PhotoSlot,
    pub src: String,
    pub fallback: &'static str,
}

pub fn photo_fallback(slot: PhotoSlot) -> &'static str {
    match slot {
        PhotoSlot::Profile => "https://picsum.photos/200/200?random=1",
        PhotoSlot::About => "https://picsum.photos/500/400?random=2",
    }
}

/// `None` for a blank URL: the preview keeps whatever it showed before.
pub fn photo_preview(slot: PhotoSlot, url: &str) -> Option<PhotoPreview> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    Some(PhotoPreview {
        slot,
        src: url.to_string(),
        fallback: photo_fallback(slot),
    })
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::content::repo_types::NO_LINK;

    fn project(id: i64, category: &str) -> Project {
        Project {
            id,
            title: format!("P{id}"),
            description: "d".into(),
            category: category.into(),
            image: "i.png".into(),
            technologies: vec!["Rust".into()],
            live_url: NO_LINK.into(),
            github_url: NO_LINK.into(),
        }
    }

    /// Ten projects, four of them `web`, interleaved.
    fn ten() -> Vec<Project> {
        ["web", "mobile", "design", "web", "mobile", "web", "design", "mobile", "web", "ai"]
            .iter()
            .enumerate()
            .map(|(i, c)| project(i as i64 + 1, c))
            .collect()
    }

    #[test]
    fn known_and_unknown_category_names() {
        assert_eq!(category_name("web"), "Web Development");
        assert_eq!(category_name("mobile"), "Mobile Apps");
        assert_eq!(category_name("design"), "Design");
        assert_eq!(category_name("blockchain"), "blockchain");
    }

    #[test]
    fn empty_admin_list_is_distinct_view() {
        assert_eq!(admin_list(&[]), AdminListView::Empty);
        match admin_list(&[project(1, "web")]) {
            AdminListView::Cards(cards) => assert_eq!(cards[0].category_name, "Web Development"),
            AdminListView::Empty => panic!("expected cards"),
        }
    }

    #[test]
    fn web_filter_returns_matches_in_order_without_load_more() {
        let grid = project_grid(&ten(), &CategoryFilter::Category("web".into()), 6);
        let ids: Vec<_> = grid.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4, 6, 9]);
        assert_eq!(grid.matching, 4);
        assert!(!grid.show_load_more);
    }

    #[test]
    fn all_filter_truncates_and_shows_load_more() {
        let grid = project_grid(&ten(), &CategoryFilter::All, 6);
        let ids: Vec<_> = grid.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(grid.show_load_more);
    }

    #[test]
    fn load_more_hidden_when_limit_equals_matching() {
        let grid = project_grid(&ten(), &CategoryFilter::All, 10);
        assert_eq!(grid.cards.len(), 10);
        assert!(!grid.show_load_more);
    }

    #[test]
    fn photo_preview_skips_blank_urls() {
        assert_eq!(photo_preview(PhotoSlot::About, "   "), None);
        let preview = photo_preview(PhotoSlot::Profile, " me.jpg ").unwrap();
        assert_eq!(preview.src, "me.jpg");
        assert_eq!(preview.fallback, "https://picsum.photos/200/200?random=1");
    }
}
