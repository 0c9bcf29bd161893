//! Pages
//!
//! One component per navigable screen, plus the enum the app switches on.

mod comments;
mod home;
mod posts;
mod quotes;
mod recipes;
mod todos;

pub use comments::CommentsPage;
pub use home::HomePage;
pub use posts::PostsPage;
pub use quotes::QuotesPage;
pub use recipes::RecipesPage;
pub use todos::TodosPage;

/// Navigable pages, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Posts,
    Recipes,
    Quotes,
    Todos,
    Comments,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Posts,
        Page::Recipes,
        Page::Quotes,
        Page::Todos,
        Page::Comments,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Posts => "Posts",
            Page::Recipes => "Recipes",
            Page::Quotes => "Quotes",
            Page::Todos => "Todos",
            Page::Comments => "Comments",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Posts => "📝",
            Page::Recipes => "🍳",
            Page::Quotes => "💬",
            Page::Todos => "✅",
            Page::Comments => "🗨️",
        }
    }

    /// Blurb for the home page card
    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Overview of the available modules",
            Page::Posts => "Manage blog posts with title, content, and tags",
            Page::Recipes => "Create and manage cooking recipes with ingredients and instructions",
            Page::Quotes => "Collect inspiring quotes from famous authors",
            Page::Todos => "Keep track of your tasks and mark them as completed",
            Page::Comments => "Browse, search and moderate comments from either mock service",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles_are_unique() {
        let mut titles: Vec<_> = Page::ALL.iter().map(|p| p.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), Page::ALL.len());
    }

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
        assert_eq!(Page::ALL[0], Page::Home);
    }
}
