//! Database Queries
//!
//! Parameterized statements for CRUD operations on records. Each function runs
//! exactly one statement against the connection it is given.

use rusqlite::{ffi, params, Connection, Row};

use super::{models::Record, DbError, DbResult};

/// Insert a new record
pub fn create_record(conn: &Connection, record: &Record) -> DbResult<()> {
    conn.execute(
        r#"
        INSERT INTO users (name, address, gender, favorite_movie, favorite_book)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            record.name,
            record.address,
            record.gender,
            record.favorite_movie,
            record.favorite_book,
        ],
    )
    .map_err(|e| {
        if is_key_violation(&e) {
            DbError::DuplicateKey(record.name.clone())
        } else {
            e.into()
        }
    })?;

    Ok(())
}

/// Delete the record named `name`, returning the number of rows removed
pub fn delete_record(conn: &Connection, name: &str) -> DbResult<usize> {
    let rows = conn.execute("DELETE FROM users WHERE name = ?1", [name])?;
    Ok(rows)
}

/// Replace every field but the name, returning the number of rows changed
pub fn update_record(conn: &Connection, record: &Record) -> DbResult<usize> {
    let rows = conn.execute(
        r#"
        UPDATE users
        SET address = ?2, gender = ?3, favorite_movie = ?4, favorite_book = ?5
        WHERE name = ?1
        "#,
        params![
            record.name,
            record.address,
            record.gender,
            record.favorite_movie,
            record.favorite_book,
        ],
    )?;

    Ok(rows)
}

/// Stream every record to `visit` as rows are read. Order is unspecified.
pub fn for_each_record<F>(conn: &Connection, mut visit: F) -> DbResult<usize>
where
    F: FnMut(Record),
{
    let mut stmt = conn.prepare(
        "SELECT name, address, gender, favorite_movie, favorite_book FROM users",
    )?;

    let mut count = 0;
    for record in stmt.query_map([], row_to_record)? {
        visit(record?);
        count += 1;
    }

    Ok(count)
}

fn row_to_record(row: &Row) -> rusqlite::Result<Record> {
    // Columns other than the key are nullable.
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };

    Ok(Record {
        name: text(0)?,
        address: text(1)?,
        gender: text(2)?,
        favorite_movie: text(3)?,
        favorite_book: text(4)?,
    })
}

fn is_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_schema;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    fn get_all_records(conn: &Connection) -> DbResult<Vec<Record>> {
        let mut records = Vec::new();
        for_each_record(conn, |record| records.push(record))?;
        Ok(records)
    }

    fn alice() -> Record {
        Record::new("Alice", "1 Main St", "F", "Matrix", "Dune")
    }

    #[test]
    fn test_record_crud() {
        let conn = setup();

        create_record(&conn, &alice()).unwrap();
        assert_eq!(get_all_records(&conn).unwrap(), vec![alice()]);

        let moved = Record::new("Alice", "2 Oak Ave", "F", "Matrix", "Dune");
        assert_eq!(update_record(&conn, &moved).unwrap(), 1);
        assert_eq!(get_all_records(&conn).unwrap(), vec![moved]);

        assert_eq!(delete_record(&conn, "Alice").unwrap(), 1);
        assert!(get_all_records(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let conn = setup();
        create_record(&conn, &alice()).unwrap();

        let imposter = Record::new("Alice", "elsewhere", "?", "Cats", "None");
        let err = create_record(&conn, &imposter).unwrap_err();
        assert!(matches!(err, DbError::DuplicateKey(ref name) if name == "Alice"));

        assert_eq!(get_all_records(&conn).unwrap(), vec![alice()]);
    }

    #[test]
    fn test_missing_name_affects_no_rows() {
        let conn = setup();
        create_record(&conn, &alice()).unwrap();

        assert_eq!(delete_record(&conn, "Bob").unwrap(), 0);
        let bob = Record::new("Bob", "x", "M", "y", "z");
        assert_eq!(update_record(&conn, &bob).unwrap(), 0);

        assert_eq!(get_all_records(&conn).unwrap(), vec![alice()]);
    }

    #[test]
    fn test_text_is_stored_verbatim() {
        let conn = setup();
        let record = Record::new(
            "  O'Brien; DROP TABLE users; --",
            "Flat 3,\t\"The Annex\"",
            "",
            "Amélie (2001)",
            " trailing space ",
        );

        create_record(&conn, &record).unwrap();
        assert_eq!(get_all_records(&conn).unwrap(), vec![record]);
    }

    #[test]
    fn test_null_columns_read_as_empty() {
        let conn = setup();
        conn.execute("INSERT INTO users (name) VALUES ('sparse')", [])
            .unwrap();

        let records = get_all_records(&conn).unwrap();
        assert_eq!(records, vec![Record::new("sparse", "", "", "", "")]);
    }

    #[test]
    fn test_for_each_counts_rows() {
        let conn = setup();
        create_record(&conn, &alice()).unwrap();
        create_record(&conn, &Record::new("Bob", "a", "b", "c", "d")).unwrap();

        let mut names = Vec::new();
        let count = for_each_record(&conn, |r| names.push(r.name)).unwrap();
        names.sort();

        assert_eq!(count, 2);
        assert_eq!(names, ["Alice", "Bob"]);
    }
}
