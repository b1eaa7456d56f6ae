use crate::common::{quote, symbol, temp_db};
use sql_dam::storage::session::{PendingRow, Session};
use sql_dam::storage::translate::quote_to_row;

#[tokio::test]
async fn staging_does_no_io_until_flush() {
    let db = temp_db();
    let engine = db.registry.engine(&db.config()).await.unwrap();
    let mut session = Session::new(engine.clone());

    session.stage(vec![PendingRow::Quote(quote_to_row(&symbol("AAPL"), &quote(1, 1.0)))]);
    assert_eq!(session.pending_rows(), 1);
    assert!(!session.in_transaction());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
        .fetch_one(engine.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);

    assert_eq!(session.flush().await.unwrap(), 1);
    assert_eq!(session.pending_rows(), 0);
    assert!(session.in_transaction());
    assert_eq!(session.commit().await.unwrap(), 1);
    assert!(!session.in_transaction());
}

#[tokio::test]
async fn commit_without_work_is_a_no_op() {
    let db = temp_db();
    let engine = db.registry.engine(&db.config()).await.unwrap();
    let mut session = Session::new(engine);
    assert_eq!(session.commit().await.unwrap(), 0);
    assert!(!session.in_transaction());
}

#[tokio::test]
async fn rollback_discards_flushed_and_staged_rows() {
    let db = temp_db();
    let engine = db.registry.engine(&db.config()).await.unwrap();
    let mut session = Session::new(engine.clone());
    let aapl = symbol("AAPL");

    session.stage(vec![PendingRow::Quote(quote_to_row(&aapl, &quote(1, 1.0)))]);
    session.flush().await.unwrap();
    session.stage(vec![PendingRow::Quote(quote_to_row(&aapl, &quote(2, 1.0)))]);
    session.rollback().await.unwrap();

    assert_eq!(session.pending_rows(), 0);
    assert!(!session.in_transaction());
    assert_eq!(session.commit().await.unwrap(), 0);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
        .fetch_one(engine.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn failed_flush_returns_the_insert_error_and_rolls_back() {
    let db = temp_db();
    let engine = db.registry.engine(&db.config()).await.unwrap();
    sqlx::query("DROP TABLE quotes")
        .execute(engine.pool())
        .await
        .unwrap();
    let mut session = Session::new(engine);

    session.stage(vec![PendingRow::Quote(quote_to_row(&symbol("AAPL"), &quote(1, 1.0)))]);
    let err = session.flush().await.unwrap_err();

    let db_err = err.as_db_error().expect("store error expected");
    assert!(db_err.to_string().contains("quotes"), "unexpected error: {db_err}");
    assert!(!session.in_transaction());
    assert_eq!(session.pending_rows(), 0);
}
