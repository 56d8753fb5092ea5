use super::*;
use crate::mock::{MockDriver, Reply};

const SQL: &str = "SELECT * FROM albums WHERE Title = ?;";

#[test]
fn query_type_detection() {
    assert_eq!(QueryType::from_sql("SELECT * FROM t;"), QueryType::Select);
    assert_eq!(QueryType::from_sql("  select 1"), QueryType::Select);
    assert_eq!(QueryType::from_sql("INSERT INTO t (a) VALUES (?)"), QueryType::Insert);
    assert_eq!(QueryType::from_sql("UPDATE t SET a = ?"), QueryType::Update);
    assert_eq!(QueryType::from_sql("DELETE FROM t"), QueryType::Delete);
    assert_eq!(QueryType::from_sql("PRAGMA table_info(t)"), QueryType::Other);
    assert_eq!(QueryType::from_sql(""), QueryType::Other);
}

#[tokio::test]
async fn execute_all_returns_rows_and_binds_values() {
    let row = crate::row! { "AlbumId" => 1, "Title" => "X" };
    let db = MockDriver::returning(vec![row.clone()]);

    let rows = execute_all(&db, SQL, vec![Value::from("X")]).await.unwrap();

    assert_eq!(rows, vec![row]);
    assert_eq!(db.only_call(), (SQL.to_string(), vec![Value::from("X")]));
}

#[tokio::test]
async fn non_success_becomes_query_failure_with_sql() {
    let db = MockDriver::new(Reply::Failed(Some("no such table: albums".into())));

    let err = execute_all(&db, SQL, vec![Value::from("X")]).await.unwrap_err();

    assert!(err.is_query_failure());
    assert_eq!(err.sql(), Some(SQL));
    let message = err.to_string();
    assert!(message.contains("no such table: albums"));
    assert!(message.contains(SQL));
}

#[tokio::test]
async fn non_success_without_reason_still_reports_sql() {
    let db = MockDriver::new(Reply::Failed(None));
    let err = execute_all(&db, SQL, Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), format!("unknown error; query: {SQL}"));
}

#[tokio::test]
async fn raised_driver_error_is_wrapped_with_sql() {
    let db = MockDriver::new(Reply::Raise("D1_ERROR: near \"FORM\": syntax error".into()));

    let err = execute_all(&db, SQL, Vec::new()).await.unwrap_err();

    assert!(err.is_driver_error());
    assert!(err.to_string().contains("syntax error"));
    assert!(err.to_string().contains(SQL));
}

#[tokio::test]
async fn prepare_failure_is_a_driver_error_and_nothing_runs() {
    let db = MockDriver::new(Reply::RejectPrepare("closed".into()));

    let err = execute_first(&db, SQL, Vec::new()).await.unwrap_err();

    assert!(err.is_driver_error());
    assert_eq!(err.sql(), Some(SQL));
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn execute_first_returns_first_row_or_none() {
    let a = crate::row! { "id" => 1 };
    let b = crate::row! { "id" => 2 };
    let db = MockDriver::returning(vec![a.clone(), b]);
    assert_eq!(execute_first(&db, SQL, Vec::new()).await.unwrap(), Some(a));

    let db = MockDriver::empty();
    assert_eq!(execute_first(&db, SQL, Vec::new()).await.unwrap(), None);
}

#[tokio::test]
async fn config_does_not_change_results() {
    let db = MockDriver::returning(vec![crate::row! { "n" => 1 }]);
    let config = ClientConfig::new().with_log_level(Level::INFO).with_max_sql_length(5);

    let rows = execute_all_with(&db, &config, SQL, Vec::new()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(db.only_call().0, SQL);
}
