use crate::domain::animal::{Animal, Breed};
use crate::domain::criteria::FilterCriteria;
use crate::pagination::Paginated;

/// Rendering seam implemented by the UI layer.
///
/// The engine never inspects the page itself: implementations project engine
/// state onto the controls and paint the result list. All methods are plain
/// side effects.
pub trait SearchView {
    /// Replace the URL query string in place, without navigating or pushing
    /// a new history entry.
    fn replace_url_query(&self, query: &str);

    /// Paint one page of results together with its page-number strip.
    fn render_page(&self, page: &Paginated<Animal>);

    /// Show the "no results" state in place of the result list.
    fn render_empty_state(&self);

    fn set_pagination_visible(&self, visible: bool);

    /// Replace the breed select options wholesale.
    fn replace_breed_options(&self, breeds: &[Breed]);

    fn set_breed_enabled(&self, enabled: bool);

    /// Project criteria back onto the filter controls (URL restore, clear).
    fn project_criteria(&self, criteria: &FilterCriteria);

    /// Decorate an already-rendered result as favorited.
    fn mark_favorite(&self, reference_number: &str, favorite_id: i64);
}
