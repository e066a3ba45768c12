//! Schema and row-to-resource mapping.

use crate::utils::resource_uri;
use common::model::example::{ExampleResource, MtmExampleResource, OtmExampleResource};
use rusqlite::{params, Connection};

const EXAMPLE: &str = "example";
const MTM_EXAMPLE: &str = "mtmexample";
const OTM_EXAMPLE: &str = "otmexample";

/// Tables exposed as public API resources.
const RESOURCES: [&str; 3] = [EXAMPLE, MTM_EXAMPLE, OTM_EXAMPLE];

pub(super) const CREATE_ALL: &str = "
CREATE TABLE IF NOT EXISTS example (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS mtmexample (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS otmexample (
    id         INTEGER PRIMARY KEY,
    name       TEXT NOT NULL UNIQUE,
    example_id INTEGER NOT NULL REFERENCES example (id)
);
CREATE TABLE IF NOT EXISTS example_mtmexample (
    example_id    INTEGER NOT NULL REFERENCES example (id),
    mtmexample_id INTEGER NOT NULL REFERENCES mtmexample (id),
    PRIMARY KEY (example_id, mtmexample_id)
);
";

// Dependents before the tables they reference.
pub(super) const DROP_ALL: &str = "
DROP TABLE IF EXISTS example_mtmexample;
DROP TABLE IF EXISTS otmexample;
DROP TABLE IF EXISTS mtmexample;
DROP TABLE IF EXISTS example;
";

/// Names of all public resources provided by the API.
pub fn resource_names() -> &'static [&'static str] {
    &RESOURCES
}

pub(super) fn examples(
    conn: &Connection,
    domain: &str,
    name: Option<&str>,
) -> rusqlite::Result<Vec<ExampleResource>> {
    let mut stmt = conn.prepare(
        "SELECT id, name FROM example WHERE ?1 IS NULL OR name = ?1 ORDER BY id",
    )?;
    let rows: Vec<(i64, String)> = stmt
        .query_map(params![name], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<_, _>>()?;

    rows.into_iter()
        .map(|(id, name)| -> rusqlite::Result<ExampleResource> {
            Ok(ExampleResource {
                name,
                uri: resource_uri(domain, EXAMPLE, id),
                mtmexamples: mtmexamples_of(conn, domain, id)?,
                otmexamples: otmexamples_of(conn, domain, id)?,
            })
        })
        .collect()
}

fn mtmexamples_of(
    conn: &Connection,
    domain: &str,
    example_id: i64,
) -> rusqlite::Result<Vec<MtmExampleResource>> {
    let mut stmt = conn.prepare(
        "SELECT m.id, m.name FROM mtmexample m
         JOIN example_mtmexample em ON em.mtmexample_id = m.id
         WHERE em.example_id = ?1
         ORDER BY m.id",
    )?;
    let resources = stmt
        .query_map(params![example_id], |row| {
            let id: i64 = row.get(0)?;
            Ok(MtmExampleResource {
                name: row.get(1)?,
                uri: resource_uri(domain, MTM_EXAMPLE, id),
            })
        })?
        .collect();
    resources
}

fn otmexamples_of(
    conn: &Connection,
    domain: &str,
    example_id: i64,
) -> rusqlite::Result<Vec<OtmExampleResource>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, example_id FROM otmexample WHERE example_id = ?1 ORDER BY id",
    )?;
    let resources = stmt
        .query_map(params![example_id], |row| {
            let id: i64 = row.get(0)?;
            Ok(OtmExampleResource {
                name: row.get(1)?,
                example_id: row.get(2)?,
                uri: resource_uri(domain, OTM_EXAMPLE, id),
            })
        })?
        .collect();
    resources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seeded_in_memory;
    use rusqlite::OptionalExtension;

    fn owner_of(conn: &Connection, otmexample_id: i64) -> rusqlite::Result<Option<String>> {
        conn.query_row(
            "SELECT e.name FROM example e JOIN otmexample o ON o.example_id = e.id WHERE o.id = ?1",
            params![otmexample_id],
            |row| row.get(0),
        )
        .optional()
    }

    #[test]
    fn filter_matches_exact_name_with_relations() {
        let db = seeded_in_memory();

        let examples = db.examples(Some("Some Example")).unwrap();

        assert_eq!(
            examples,
            vec![ExampleResource {
                name: "Some Example".to_string(),
                uri: "http://api.packagename.local/api/v1/example/1".to_string(),
                mtmexamples: vec![],
                otmexamples: vec![OtmExampleResource {
                    example_id: 1,
                    name: "Some One-to-Many Example".to_string(),
                    uri: "http://api.packagename.local/api/v1/otmexample/1".to_string(),
                }],
            }]
        );
    }

    #[test]
    fn many_to_many_links_are_embedded() {
        let db = seeded_in_memory();

        let examples = db.examples(Some("Some Other Example")).unwrap();

        assert_eq!(examples.len(), 1);
        assert_eq!(
            examples[0].mtmexamples,
            vec![MtmExampleResource {
                name: "Some Many-to-Many Example".to_string(),
                uri: "http://api.packagename.local/api/v1/mtmexample/1".to_string(),
            }]
        );
        assert!(examples[0].otmexamples.is_empty());
    }

    #[test]
    fn unknown_name_yields_empty_list() {
        let db = seeded_in_memory();

        assert!(db.examples(Some("Nope")).unwrap().is_empty());
        assert!(db.examples(Some("")).unwrap().is_empty());
    }

    #[test]
    fn otm_rows_point_back_to_their_example() {
        let db = seeded_in_memory();
        let conn = db.lock().unwrap();

        assert_eq!(owner_of(&conn, 1).unwrap().as_deref(), Some("Some Example"));
        assert_eq!(owner_of(&conn, 2).unwrap(), None);
    }

    #[test]
    fn lists_every_public_resource() {
        assert_eq!(resource_names(), &["example", "mtmexample", "otmexample"]);
    }
}
