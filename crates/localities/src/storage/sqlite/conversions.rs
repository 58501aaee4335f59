//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and localities.

use localities_core::locality::Locality;
use rusqlite::Row;

/// Convert a SQLite row to a Locality.
///
/// Expected columns: code, statisticalcode, name, status, parentcode
pub fn row_to_locality(row: &Row) -> rusqlite::Result<Locality> {
    Ok(Locality {
        code: row.get(0)?,
        statistical_code: row.get(1)?,
        name: row.get(2)?,
        status: row.get(3)?,
        parent_code: row.get(4)?,
    })
}

/// Parameters for `INSERT_LOCALITY`, in column order.
pub fn locality_params(locality: &Locality) -> (i64, i64, String, i64, i64) {
    (
        locality.code,
        locality.statistical_code,
        locality.name.clone(),
        locality.status,
        locality.parent_code,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_row_to_locality() {
        let conn = Connection::open_in_memory().unwrap();

        let locality = conn
            .query_row("SELECT 3, 30, 'Gamma', 2, 1", [], row_to_locality)
            .unwrap();

        assert_eq!(
            locality,
            Locality::new(3, "Gamma")
                .with_statistical_code(30)
                .with_status(2)
                .with_parent_code(1)
        );
    }

    #[test]
    fn test_row_with_text_code_fails() {
        let conn = Connection::open_in_memory().unwrap();

        let result = conn.query_row("SELECT 'x', 30, 'Gamma', 2, 1", [], row_to_locality);

        assert!(result.is_err());
    }

    #[test]
    fn test_locality_params_in_column_order() {
        let locality = Locality::new(1, "Alpha").with_statistical_code(10).with_status(1);

        assert_eq!(
            locality_params(&locality),
            (1, 10, "Alpha".to_string(), 1, 0)
        );
    }
}
