// ============================================================
// Layer 4 - SQLite Record Loader
// ============================================================
// Reads (subject, labels) pairs out of the email store.
//
// Each configured table is queried in turn and its rows are
// appended in stored order, so with the default tables the
// result is every `emails` row followed by every
// `deleted_emails` row.
//
// The connection is opened read-only:
//   - a missing database file is an open error, instead of
//     SQLite quietly creating an empty one
//   - nothing in this pipeline ever writes to the store
//
// The Connection lives on this function's stack, so it is
// closed on every exit path, including `?` returns.
//
// Reference: rusqlite crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

use crate::domain::record::Record;
use crate::domain::traits::RecordSource;

/// Loads records from one or more tables of a SQLite database.
pub struct SqliteLoader {
    /// Path to the SQLite file
    db_path: PathBuf,

    /// Tables to read, in output order
    tables: Vec<String>,
}

impl SqliteLoader {
    pub fn new(db_path: impl Into<PathBuf>, tables: Vec<String>) -> Self {
        Self {
            db_path: db_path.into(),
            tables,
        }
    }
}

impl RecordSource for SqliteLoader {
    fn load_all(&self) -> Result<Vec<Record>> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Cannot open database '{}'", self.db_path.display()))?;

        let mut records = Vec::new();

        for table in &self.tables {
            let rows = fetch_table(&conn, table)?;
            tracing::info!("Fetched {} rows from '{}'", rows.len(), table);
            records.extend(rows);
        }

        Ok(records)
    }
}

/// Read every (subject, labels) row of `table` in stored order.
///
/// A NULL subject becomes an empty string. A NULL labels value
/// is an error, since there is nothing to encode.
fn fetch_table(conn: &Connection, table: &str) -> Result<Vec<Record>> {
    let sql = format!("SELECT subject, labels FROM {}", quote_identifier(table));

    let mut stmt = conn
        .prepare(&sql)
        .with_context(|| format!("Cannot query table '{table}'"))?;

    let rows = stmt
        .query_map([], |row| {
            let text: Option<String> = row.get(0)?;
            let labels_raw: String   = row.get(1)?;
            Ok(Record {
                text: text.unwrap_or_default(),
                labels_raw,
            })
        })
        .with_context(|| format!("Cannot query table '{table}'"))?;

    let records = rows
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Cannot read rows from table '{table}'"))?;

    Ok(records)
}

/// Double-quote an SQL identifier, escaping embedded quotes
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::email_store::{fixtures::NewEmail, EmailStore, EmailTable};
    use tempfile::TempDir;

    fn default_tables() -> Vec<String> {
        EmailTable::ALL.iter().map(|t| t.name().to_string()).collect()
    }

    fn seeded_db(dir: &TempDir) -> PathBuf {
        let path  = dir.path().join("emails.sqlite");
        let store = EmailStore::open(&path).unwrap();
        store.insert(EmailTable::Inbox,   &NewEmail::labelled("first",  "Work")).unwrap();
        store.insert(EmailTable::Deleted, &NewEmail::labelled("third",  "Promo")).unwrap();
        store.insert(EmailTable::Inbox,   &NewEmail::labelled("second", "Work, Urgent")).unwrap();
        path
    }

    #[test]
    fn test_concatenates_tables_in_order() {
        let dir    = TempDir::new().unwrap();
        let loader = SqliteLoader::new(seeded_db(&dir), default_tables());

        let records = loader.load_all().unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("first",  "Work"),
                Record::new("second", "Work, Urgent"),
                Record::new("third",  "Promo"),
            ]
        );
    }

    #[test]
    fn test_missing_database_is_an_error() {
        let dir    = TempDir::new().unwrap();
        let path   = dir.path().join("nope.sqlite");
        let loader = SqliteLoader::new(&path, default_tables());

        let err = loader.load_all().unwrap_err();
        assert!(err.to_string().contains("Cannot open database"));
        // Read-only open must not create the file
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let dir    = TempDir::new().unwrap();
        let loader = SqliteLoader::new(seeded_db(&dir), vec!["archive".to_string()]);

        let err = loader.load_all().unwrap_err();
        assert!(err.to_string().contains("archive"));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("bare.sqlite");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch("CREATE TABLE emails (id INTEGER PRIMARY KEY, subject TEXT);")
                .unwrap();
        }

        let loader = SqliteLoader::new(&path, vec!["emails".to_string()]);
        assert!(loader.load_all().is_err());
    }

    #[test]
    fn test_null_subject_reads_as_empty() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("nulls.sqlite");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE emails (subject TEXT, labels TEXT);
                 INSERT INTO emails VALUES (NULL, 'Work');",
            )
            .unwrap();
        }

        let loader  = SqliteLoader::new(&path, vec!["emails".to_string()]);
        let records = loader.load_all().unwrap();
        assert_eq!(records, vec![Record::new("", "Work")]);
    }

    #[test]
    fn test_null_labels_is_an_error() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("nulls.sqlite");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE emails (subject TEXT, labels TEXT);
                 INSERT INTO emails VALUES ('hello', NULL);",
            )
            .unwrap();
        }

        let loader = SqliteLoader::new(&path, vec!["emails".to_string()]);
        assert!(loader.load_all().is_err());
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("emails"), "\"emails\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
