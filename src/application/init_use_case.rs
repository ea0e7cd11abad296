// ============================================================
// Layer 2 - InitUseCase
// ============================================================
// Creates the email database, if missing, with the `emails`
// and `deleted_emails` tables the exporter reads from.
// Existing tables and rows are left untouched.

use anyhow::Result;
use std::path::PathBuf;

use crate::infra::email_store::{EmailStore, EmailTable};

pub struct InitUseCase {
    db_path: PathBuf,
}

impl InitUseCase {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self { db_path: db_path.into() }
    }

    /// Ensure the schema exists and return the row count per table
    pub fn execute(&self) -> Result<Vec<(EmailTable, usize)>> {
        let store = EmailStore::open(&self.db_path)?;
        tracing::info!("Email store ready at '{}'", store.path().display());

        let mut counts = Vec::with_capacity(EmailTable::ALL.len());
        for table in EmailTable::ALL {
            counts.push((table, store.count(table)?));
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::email_store::fixtures::NewEmail;
    use tempfile::TempDir;

    #[test]
    fn test_creates_empty_tables() {
        let dir    = TempDir::new().unwrap();
        let counts = InitUseCase::new(dir.path().join("emails.sqlite")).execute().unwrap();
        assert_eq!(counts, vec![(EmailTable::Inbox, 0), (EmailTable::Deleted, 0)]);
    }

    #[test]
    fn test_keeps_existing_rows() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("emails.sqlite");
        EmailStore::open(&path)
            .unwrap()
            .insert(EmailTable::Deleted, &NewEmail::labelled("old", "Promo"))
            .unwrap();

        let counts = InitUseCase::new(&path).execute().unwrap();
        assert_eq!(counts, vec![(EmailTable::Inbox, 0), (EmailTable::Deleted, 1)]);
    }
}
