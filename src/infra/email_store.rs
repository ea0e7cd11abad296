// ============================================================
// Layer 6 - Email Store
// ============================================================
// Owns the SQLite schema that the email collector writes into
// and the exporter reads from.
//
// Two tables share one layout:
//   emails          - messages still in the inbox
//   deleted_emails  - messages the user deleted
//
// Both carry a `labels` column holding a comma-space joined list
// of label names, e.g. "Work, Urgent". The exporter only needs
// `subject` and `labels`; the remaining columns are kept so a
// database created here is interchangeable with one created by
// the collector.
//
// Reference: rusqlite crate documentation

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// The two email tables, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTable {
    Inbox,
    Deleted,
}

impl EmailTable {
    pub const ALL: [EmailTable; 2] = [EmailTable::Inbox, EmailTable::Deleted];

    pub fn name(self) -> &'static str {
        match self {
            EmailTable::Inbox   => "emails",
            EmailTable::Deleted => "deleted_emails",
        }
    }
}

/// Read-write handle on the email database.
pub struct EmailStore {
    conn: Connection,
    path: PathBuf,
}

impl EmailStore {
    /// Open (creating if needed) the database at `path` and make
    /// sure both email tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)
            .with_context(|| format!("Cannot open database '{}'", path.display()))?;

        let store = Self { conn, path };
        store.create_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// CREATE TABLE IF NOT EXISTS for both tables. Safe to rerun.
    pub fn create_schema(&self) -> Result<()> {
        for table in EmailTable::ALL {
            self.conn
                .execute_batch(&table_ddl(table.name()))
                .with_context(|| format!("Cannot create table '{}'", table.name()))?;
            tracing::debug!("Ensured table '{}'", table.name());
        }
        Ok(())
    }

    /// Number of rows currently in `table`
    pub fn count(&self, table: EmailTable) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let n: i64 = self
            .conn
            .query_row(&sql, [], |row| row.get(0))
            .with_context(|| format!("Cannot count rows in '{}'", table.name()))?;

        usize::try_from(n)
            .with_context(|| format!("Row count {n} for '{}' is out of range", table.name()))
    }
}

fn table_ddl(name: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {name} (
            id INTEGER PRIMARY KEY,
            "subject" TEXT,
            "body" TEXT,
            "from" TEXT,
            "to" TEXT,
            "Cc" TEXT,
            "Bcc" TEXT,
            "sentDate" TEXT,
            "sender" TEXT,
            "read" BOOLEAN DEFAULT 0,
            "deleted" BOOLEAN DEFAULT 0,
            "labels" TEXT,
            created_at DATETIME,
            UNIQUE(subject, "from", "to", "sentDate")
        );"#
    )
}
