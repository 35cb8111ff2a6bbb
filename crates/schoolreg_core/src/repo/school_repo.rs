//! School repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the registry's two persistence operations over the `schools`
//!   collection: insert-and-assign-id, and read-all.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The store assigns `id` on insert; callers never supply one.
//! - Write paths must call `SchoolDraft::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::school::{School, SchoolDraft, SchoolId, SchoolValidationError};
use rusqlite::{params, Connection, Row};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SCHOOLS_TABLE: &str = "schools";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "name",
    "address",
    "city",
    "state",
    "contact",
    "email_id",
    "image",
    "created_at",
];

const SCHOOL_SELECT_SQL: &str = "SELECT
    id,
    name,
    address,
    city,
    state,
    contact,
    email_id,
    image,
    created_at
FROM schools";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for school persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(SchoolValidationError),
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted school data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SchoolValidationError> for RepoError {
    fn from(value: SchoolValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the school record collection.
///
/// Deliberately minimal: the registry has no update, delete, or lookup
/// operations.
pub trait SchoolRepository {
    /// Appends one record; the store assigns and returns its id.
    fn insert_school(&self, draft: &SchoolDraft) -> RepoResult<SchoolId>;
    /// Returns all records in insertion (id) order.
    fn list_schools(&self) -> RepoResult<Vec<School>>;
}

/// SQLite-backed school repository.
pub struct SqliteSchoolRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSchoolRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version does not match.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   shape is wrong despite the version marker.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SchoolRepository for SqliteSchoolRepository<'_> {
    fn insert_school(&self, draft: &SchoolDraft) -> RepoResult<SchoolId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO schools (
                name,
                address,
                city,
                state,
                contact,
                email_id,
                image
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                draft.name.as_str(),
                draft.address.as_str(),
                draft.city.as_str(),
                draft.state.as_str(),
                draft.contact.as_str(),
                draft.email_id.as_str(),
                draft.image.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_schools(&self) -> RepoResult<Vec<School>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SCHOOL_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut schools = Vec::new();

        while let Some(row) = rows.next()? {
            schools.push(parse_school_row(row)?);
        }

        Ok(schools)
    }
}

fn parse_school_row(row: &Row<'_>) -> RepoResult<School> {
    let id: i64 = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in schools.id"
        )));
    }

    Ok(School {
        id,
        name: row.get("name")?,
        address: row.get("address")?,
        city: row.get("city")?,
        state: row.get("state")?,
        contact: row.get("contact")?,
        email_id: row.get("email_id")?,
        image: row.get("image")?,
        created_at: row.get("created_at")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version =
        conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [SCHOOLS_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(SCHOOLS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present: HashSet<String> = stmt
        .query_map([SCHOOLS_TABLE], |row| row.get(0))?
        .collect::<Result<_, _>>()?;

    for column in REQUIRED_COLUMNS {
        if !present.contains(*column) {
            return Err(RepoError::MissingRequiredColumn {
                table: SCHOOLS_TABLE,
                column: *column,
            });
        }
    }

    Ok(())
}
