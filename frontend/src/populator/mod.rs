//! Page populator: fetch the example records and render them after the page
//! heading.
//!
//! The flow is a single linear sequence with one suspension point:
//!
//! 1. `RecordSource::fetch_records` issues the one GET request.
//! 2. `render::render_records` builds the HTML string.
//! 3. `RenderTarget::insert_after` inserts it in one operation.
//!
//! Both ends are traits so the browser bindings (`dom::HeadingTarget`,
//! `api::HttpRecordSource`) can be swapped for in-memory doubles. Any failure
//! aborts before the target is touched. Calling `populate_page` twice inserts
//! twice; there is no guard against repeated population.

mod render;

use common::model::record::Record;

pub use render::{render_records, INTRO_FRAGMENT};

/// Id of the element the records are rendered after.
pub const HEADING_ID: &str = "heading";

/// Endpoint listing the records.
pub const RECORDS_ENDPOINT: &str = "/api/v1/replace-me";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopulateError {
    #[error("no element with id `{0}` to populate")]
    MissingHeading(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("response body is not a JSON array: {0}")]
    Decode(String),
    #[error("could not insert rendered records: {0}")]
    Dom(String),
}

/// Where the rendered records go.
pub trait RenderTarget {
    /// Inserts `html` immediately after the target element.
    fn insert_after(&self, html: &str) -> Result<(), PopulateError>;
}

/// Where the records come from.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, PopulateError>;
}

/// Parses a response body as a JSON array of records.
///
/// Entries are not validated; anything that is not an object simply has no
/// `name`.
pub fn decode_records(body: &str) -> Result<Vec<Record>, PopulateError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| PopulateError::Decode(e.to_string()))?;
    Ok(values.into_iter().map(Record::from).collect())
}

/// Fetches every record from `source` and inserts them after `target`.
pub async fn populate_page<S, T>(source: &S, target: &T) -> Result<(), PopulateError>
where
    S: RecordSource,
    T: RenderTarget,
{
    let records = source.fetch_records().await?;
    let html = render_records(&records);
    target.insert_after(&html)
}

/// Populates after `heading`, failing before any request when it is absent.
pub async fn populate_heading<S, T>(source: &S, heading: Option<T>) -> Result<(), PopulateError>
where
    S: RecordSource,
    T: RenderTarget,
{
    let target = heading.ok_or_else(|| PopulateError::MissingHeading(HEADING_ID.to_string()))?;
    populate_page(source, &target).await
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Serves a fixed response body, or fails like an unreachable server.
    pub struct StubSource {
        pub body: Result<&'static str, PopulateError>,
        pub calls: Cell<usize>,
    }

    impl StubSource {
        pub fn body(body: &'static str) -> Self {
            StubSource {
                body: Ok(body),
                calls: Cell::new(0),
            }
        }

        pub fn offline() -> Self {
            StubSource {
                body: Err(PopulateError::Network("Failed to fetch".to_string())),
                calls: Cell::new(0),
            }
        }
    }

    impl RecordSource for StubSource {
        async fn fetch_records(&self) -> Result<Vec<Record>, PopulateError> {
            self.calls.set(self.calls.get() + 1);
            decode_records(self.body.clone()?)
        }
    }

    /// Records every insertion instead of touching a document.
    #[derive(Default)]
    pub struct RecordingTarget {
        pub inserted: RefCell<Vec<String>>,
    }

    impl RenderTarget for RecordingTarget {
        fn insert_after(&self, html: &str) -> Result<(), PopulateError> {
            self.inserted.borrow_mut().push(html.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{RecordingTarget, StubSource};
    use super::*;

    #[tokio::test]
    async fn renders_records_in_server_order() {
        let source = StubSource::body(r#"[{"name":"alpha"},{"name":"beta"}]"#);
        let target = RecordingTarget::default();

        populate_page(&source, &target).await.unwrap();

        assert_eq!(
            *target.inserted.borrow(),
            vec![format!(
                "{}<pre>Example resource: alpha</pre><pre>Example resource: beta</pre>",
                INTRO_FRAGMENT
            )]
        );
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn empty_list_inserts_only_the_intro() {
        let target = RecordingTarget::default();

        populate_page(&StubSource::body("[]"), &target).await.unwrap();

        assert_eq!(*target.inserted.borrow(), vec![INTRO_FRAGMENT.to_string()]);
    }

    #[tokio::test]
    async fn populating_twice_inserts_twice() {
        let source = StubSource::body(r#"[{"name":"alpha"}]"#);
        let target = RecordingTarget::default();

        populate_page(&source, &target).await.unwrap();
        populate_page(&source, &target).await.unwrap();

        let inserted = target.inserted.borrow();
        assert_eq!(inserted.len(), 2);
        assert!(inserted.iter().all(|html| html.starts_with(INTRO_FRAGMENT)));
        assert_eq!(inserted[0], inserted[1]);
    }

    #[tokio::test]
    async fn network_failure_leaves_the_page_untouched() {
        let target = RecordingTarget::default();

        let err = populate_page(&StubSource::offline(), &target)
            .await
            .unwrap_err();

        assert!(matches!(err, PopulateError::Network(_)));
        assert!(target.inserted.borrow().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_leaves_the_page_untouched() {
        let target = RecordingTarget::default();

        let err = populate_page(&StubSource::body("<html>oops</html>"), &target)
            .await
            .unwrap_err();

        assert!(matches!(err, PopulateError::Decode(_)));
        assert!(target.inserted.borrow().is_empty());
    }

    #[tokio::test]
    async fn problem_object_is_not_a_record_list() {
        let target = RecordingTarget::default();
        let body = r#"{"object":"error","status":400,"details":"Invalid query parameters."}"#;

        let err = populate_page(&StubSource::body(body), &target)
            .await
            .unwrap_err();

        assert!(matches!(err, PopulateError::Decode(_)));
        assert!(target.inserted.borrow().is_empty());
    }

    #[tokio::test]
    async fn records_without_name_render_placeholder() {
        let target = RecordingTarget::default();

        populate_page(&StubSource::body(r#"[{"uri":"x"},{"name":"beta"}]"#), &target)
            .await
            .unwrap();

        assert_eq!(
            target.inserted.borrow()[0],
            format!(
                "{}<pre>Example resource: undefined</pre><pre>Example resource: beta</pre>",
                INTRO_FRAGMENT
            )
        );
    }

    #[tokio::test]
    async fn missing_heading_fails_without_fetching() {
        let source = StubSource::body("[]");

        let err = populate_heading(&source, None::<RecordingTarget>)
            .await
            .unwrap_err();

        assert_eq!(err, PopulateError::MissingHeading("heading".to_string()));
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn decode_accepts_api_resources() {
        let body = r#"[{"name":"Some Example","uri":"http://api.packagename.local/api/v1/example/1","mtmexamples":[],"otmexamples":[]}]"#;

        let records = decode_records(body).unwrap();

        assert_eq!(records, vec![Record::named("Some Example")]);
    }
}
