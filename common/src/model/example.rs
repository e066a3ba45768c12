use serde::{Deserialize, Serialize};

/// Public representation of a row of the `example` table.
///
/// This is the payload of `GET /api/v1/replace-me`. Internal columns such as
/// the row id are never serialized; the record is addressed through `uri`
/// instead. Related resources are embedded without their own relations to
/// avoid cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleResource {
    pub name: String,
    pub uri: String,
    /// Resources linked through the `example_mtmexample` association table.
    pub mtmexamples: Vec<MtmExampleResource>,
    /// Resources that reference this example through `otmexample.example_id`.
    pub otmexamples: Vec<OtmExampleResource>,
}

/// A `mtmexample` row embedded in another resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtmExampleResource {
    pub name: String,
    pub uri: String,
}

/// A `otmexample` row embedded in another resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtmExampleResource {
    pub example_id: i64,
    pub name: String,
    pub uri: String,
}
