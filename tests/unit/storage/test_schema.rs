use sql_dam::error::DamError;
use sql_dam::storage::schema::{Dialect, TABLES, create_statements};

#[test]
fn dialect_from_url_recognises_supported_schemes() {
    assert_eq!(
        Dialect::from_url("postgres://u:p@localhost/db").unwrap(),
        Dialect::Postgres
    );
    assert_eq!(
        Dialect::from_url("PostgreSQL://localhost/db").unwrap(),
        Dialect::Postgres
    );
    assert_eq!(Dialect::from_url("sqlite::memory:").unwrap(), Dialect::Sqlite);
    assert_eq!(
        Dialect::from_url("sqlite:///tmp/quotes.db").unwrap(),
        Dialect::Sqlite
    );
}

#[test]
fn dialect_from_url_rejects_other_schemes() {
    for url in ["mysql://localhost/db", "quotes.db", ""] {
        assert!(
            matches!(Dialect::from_url(url), Err(DamError::InvalidInput(_))),
            "should fail for {url}"
        );
    }
}

#[test]
fn create_statements_are_idempotent_and_cover_every_table() {
    for dialect in [Dialect::Postgres, Dialect::Sqlite] {
        let statements = create_statements(dialect);
        for table in TABLES {
            assert!(
                statements
                    .iter()
                    .any(|s| s.contains(&format!("CREATE TABLE IF NOT EXISTS {table} ("))),
                "missing {table} for {dialect}"
            );
        }
        assert!(statements.iter().all(|s| s.contains("IF NOT EXISTS")));
        assert!(statements.iter().all(|s| !s.contains("DROP")));
    }
}

#[test]
fn create_statements_use_dialect_primary_keys() {
    let pg = create_statements(Dialect::Postgres).join("\n");
    assert!(pg.contains("id BIGSERIAL PRIMARY KEY"));
    assert!(!pg.contains("AUTOINCREMENT"));

    let lite = create_statements(Dialect::Sqlite).join("\n");
    assert!(lite.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
}

#[test]
fn column_widths_follow_the_table_layout() {
    let ddl = create_statements(Dialect::Postgres).join("\n");
    assert!(ddl.contains("symbol VARCHAR(12)"));
    assert!(ddl.contains("field VARCHAR(50)"));
    assert!(ddl.contains("time_stamp VARCHAR(50)"));
    assert!(ddl.contains("volume VARCHAR(12)"));
    assert!(ddl.contains("adj_close VARCHAR(12)"));
    assert!(ddl.contains("time BIGINT"));
}
