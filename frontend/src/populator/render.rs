use common::model::record::Record;

/// Static fragment every insertion starts with.
pub const INTRO_FRAGMENT: &str = "<p>This was populated by WebAssembly.</p>";

/// Builds the markup inserted after the heading: the intro followed by one
/// `<pre>` block per record, in order. Names are embedded without escaping.
pub fn render_records(records: &[Record]) -> String {
    let mut html = String::from(INTRO_FRAGMENT);
    for record in records {
        html.push_str(&format!(
            "<pre>Example resource: {}</pre>",
            record.display_name()
        ));
    }
    html
}
