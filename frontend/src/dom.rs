use crate::populator::{PopulateError, RenderTarget};
use web_sys::{Document, Element};

/// The page heading records are rendered after.
pub struct HeadingTarget {
    element: Element,
}

impl HeadingTarget {
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        document
            .get_element_by_id(id)
            .map(|element| HeadingTarget { element })
    }
}

impl RenderTarget for HeadingTarget {
    fn insert_after(&self, html: &str) -> Result<(), PopulateError> {
        self.element
            .insert_adjacent_html("afterend", html)
            .map_err(|e| PopulateError::Dom(format!("{:?}", e)))
    }
}
