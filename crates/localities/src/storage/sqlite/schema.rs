//! SQLite schema definitions and SQL query constants.
//!
//! Column names are the lowercase, untagged equivalents of the wire fields.

/// SQL statement to create the localities table.
///
/// `code` is an `INTEGER PRIMARY KEY`, so the table's natural order is by code.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS localities (
    code INTEGER PRIMARY KEY NOT NULL,
    statisticalcode INTEGER NOT NULL,
    name TEXT NOT NULL,
    status INTEGER NOT NULL,
    parentcode INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_localities_parentcode ON localities(parentcode);
"#;

pub const SELECT_ALL_LOCALITIES: &str = r#"
SELECT code, statisticalcode, name, status, parentcode
FROM localities
"#;

pub const SELECT_LOCALITY_BY_CODE: &str = r#"
SELECT code, statisticalcode, name, status, parentcode
FROM localities
WHERE code = ?1
"#;

pub const INSERT_LOCALITY: &str = r#"
INSERT INTO localities (code, statisticalcode, name, status, parentcode)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

/// Overwrites every column, including `code`, of the row matching `?1`.
pub const UPDATE_LOCALITY_BY_CODE: &str = r#"
UPDATE localities
SET code = ?2, statisticalcode = ?3, name = ?4, status = ?5, parentcode = ?6
WHERE code = ?1
"#;

pub const DELETE_LOCALITY_BY_CODE: &str = r#"
DELETE FROM localities
WHERE code = ?1
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS localities"));
        assert!(CREATE_TABLES.contains("code INTEGER PRIMARY KEY"));
    }

    #[test]
    fn test_queries_use_lowercase_columns() {
        for query in [
            SELECT_ALL_LOCALITIES,
            SELECT_LOCALITY_BY_CODE,
            INSERT_LOCALITY,
            UPDATE_LOCALITY_BY_CODE,
        ] {
            assert!(query.contains("statisticalcode"));
            assert!(query.contains("parentcode"));
        }
        assert!(DELETE_LOCALITY_BY_CODE.contains("DELETE"));
    }

    #[test]
    fn test_update_rewrites_code() {
        assert!(UPDATE_LOCALITY_BY_CODE.contains("SET code = ?2"));
    }
}
