use crate::html::Node;
use crate::{PageMetadata, RouteParams};

/// A route-level content unit.
///
/// Both methods must be pure functions of `params`. `metadata` is called
/// without `render` when only the document head is needed, so it must not
/// depend on anything `render` computes.
///
/// # Example
///
/// ```rust
/// use astrasim_core::{html::{Element, Node}, Page, PageMetadata, RouteParams};
///
/// struct About;
///
/// impl Page for About {
///     fn name(&self) -> &'static str {
///         "about"
///     }
///
///     fn metadata(&self, _params: &RouteParams) -> PageMetadata {
///         PageMetadata::titled("AstraSim — About")
///     }
///
///     fn render(&self, _params: &RouteParams) -> Node {
///         Element::new("p").text("About AstraSim").into()
///     }
/// }
/// ```
pub trait Page: Send + Sync {
    /// Stable identifier reported in route listings and metadata.
    fn name(&self) -> &'static str;

    fn metadata(&self, params: &RouteParams) -> PageMetadata;

    fn render(&self, params: &RouteParams) -> Node;
}
