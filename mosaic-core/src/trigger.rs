//! Scroll-position predicates deciding when to request the next page.
//!
//! Both variants are pure functions over layout measurements and are safe to
//! re-evaluate on every scroll tick: firing while a fetch is already in flight
//! is a no-op at the coordinator level.

/// Margin in pixels before the bottom of the page at which the page-scroll
/// variant starts fetching.
pub const DEFAULT_FETCH_MARGIN: f32 = 1024.0;

/// Measurements for the whole-page scroll variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageScrollMetrics {
    /// Full height of the document.
    pub document_height: f32,
    /// Height of the visible viewport.
    pub viewport_height: f32,
    /// Current scroll offset from the top.
    pub scroll_top: f32,
}

/// Measurements for a scrollable container element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementScrollMetrics {
    pub scroll_top: f32,
    pub client_height: f32,
    pub scroll_height: f32,
}

/// True once the viewport bottom is within `margin` pixels of the document
/// bottom.
pub fn page_scroll_should_fetch(
    metrics: PageScrollMetrics,
    margin: f32,
) -> bool {
    let consumed = (metrics.viewport_height + metrics.scroll_top).ceil();
    metrics.document_height - consumed <= margin
}

/// True exactly when the container is scrolled to its bottom. No margin: this
/// variant fires at the edge, matching scrollable panes that own their own
/// scrollbar.
pub fn element_scroll_should_fetch(metrics: ElementScrollMetrics) -> bool {
    metrics.scroll_top + metrics.client_height >= metrics.scroll_height
}
