// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime behavior of derived domain models against the in-memory store.

use std::sync::Arc;

use objsql::{DEFAULT_DATA_SOURCE_NAME, prelude::*};

#[derive(Debug, Clone, PartialEq, DomainModel)]
pub struct Order {
    id:       Option<i64>,
    customer: String,
    amount:   Option<i32>
}

#[derive(Debug, Clone, PartialEq, DomainModel)]
#[domain_model(
    table_name = "orders_2023",
    primary_key_type = "Integer",
    skip_null_on_update = false
)]
pub struct ArchivedOrder {
    id:       Option<i32>,
    customer: String,
    amount:   Option<i32>
}

#[derive(Debug, Clone, PartialEq, DomainModel)]
#[domain_model(
    data_source = "support",
    primary_key_type = "Short",
    primary_column_name = "ticket_no",
    primary_key_default_value = "AUTO_INCREMENT",
    fluent = false
)]
pub struct Ticket {
    id:      Option<i16>,
    subject: String
}

#[derive(Debug, Clone, PartialEq, DomainModel)]
#[domain_model(all_fields_persistent = false)]
pub struct Customer {
    id:     i64,
    #[column(persistent)]
    name:   String,
    #[column(persistent, skip_query)]
    email:  Option<String>,
    draft:  bool,
    #[column(transient)]
    visits: u32
}

fn order(id: Option<i64>, customer: &str, amount: Option<i32>) -> Order {
    Order {
        id,
        customer: customer.to_owned(),
        amount
    }
}

fn single(store: &Arc<MemoryDataSource>) -> DataSources {
    DataSources::single(store.clone())
}

#[test]
fn order_with_defaults_declaration() {
    assert_eq!(Order::TABLE_NAME, "orders");
    assert_eq!(Order::DATA_SOURCE_NAME, DEFAULT_DATA_SOURCE_NAME);
    assert_eq!(Order::PRIMARY_COLUMN_NAME, "id");
    assert_eq!(Order::PRIMARY_FIELD_NAME, "id");
    assert_eq!(Order::PRIMARY_KEY_DEFAULT_VALUE, None);
    assert!(Order::SKIP_NULL_ON_UPDATE);
    assert!(Order::ALL_FIELDS_PERSISTENT);
    assert!(Order::FLUENT);
    assert_eq!(Order::columns(), ["id", "customer", "amount"]);

    let key: <Order as DomainModel>::Key = 7_i64;
    assert_eq!(key.to_value(), Value::Int(7));
}

#[test]
fn orders_2023_declaration() {
    assert_eq!(ArchivedOrder::TABLE_NAME, "orders_2023");
    assert!(!ArchivedOrder::SKIP_NULL_ON_UPDATE);

    let key: <ArchivedOrder as DomainModel>::Key = 7_i32;
    assert_eq!(key.to_value(), Value::Int(7));
}

#[test]
fn fluent_setters_chain() {
    let mut order = order(None, "", None);
    order.set_customer("acme").set_amount(12_i32).set_id(3_i64);
    assert_eq!(order.customer(), "acme");
    assert_eq!(order.amount(), &Some(12));
    assert_eq!(order.id(), &Some(3));
}

#[test]
fn plain_setters_return_unit() {
    let mut ticket = Ticket {
        id:      None,
        subject: String::new()
    };
    let () = ticket.set_subject("printer");
    assert_eq!(ticket.subject(), "printer");
    assert!(!Ticket::FLUENT);
}

#[test]
fn update_never_assigns_key() {
    let statements = [
        order(Some(1), "acme", Some(3)).update_statement(),
        ArchivedOrder {
            id:       Some(1),
            customer: "acme".into(),
            amount:   None
        }
        .update_statement()
    ];
    for statement in statements {
        assert_eq!(statement.key(), &Value::Int(1));
        assert!(statement.assignments().iter().all(|(c, _)| c != "id"));
    }
}

#[test]
fn null_fields_follow_skip_flag() {
    let skipped = order(Some(1), "acme", None).update_statement();
    let columns: Vec<_> = skipped.assignments().iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(columns, ["customer"]);

    let written = ArchivedOrder {
        id:       Some(1),
        customer: "acme".into(),
        amount:   None
    }
    .update_statement();
    assert_eq!(
        written.assignments(),
        [
            ("customer".to_owned(), Value::from("acme")),
            ("amount".to_owned(), Value::Null)
        ]
    );
}

#[test]
fn store_assigned_key_is_left_out_of_insert() {
    let ticket = Ticket {
        id:      Some(4),
        subject: "printer".into()
    };
    let statement = ticket.insert_statement();
    assert_eq!(statement.generated_key(), Some("AUTO_INCREMENT"));
    assert_eq!(statement.columns().collect::<Vec<_>>(), ["subject"]);
    assert_eq!(Ticket::columns(), ["ticket_no", "subject"]);
}

#[tokio::test]
async fn insert_assigns_key_and_finds_it() {
    let store = Arc::new(MemoryDataSource::new());
    let orders = Order::table(&single(&store)).unwrap();

    let mut first = order(None, "acme", Some(5));
    first.insert(&orders).await.unwrap();
    assert_eq!(first.id(), &Some(1));

    let found = orders.find_by_primary_key(1).await.unwrap();
    assert_eq!(found, Some(first));
    assert_eq!(orders.count().await.unwrap(), 1);
}

#[tokio::test]
async fn skip_null_on_update_keeps_stored_values() {
    let store = Arc::new(MemoryDataSource::new());
    let orders = Order::table(&single(&store)).unwrap();

    let mut order = order(Some(10), "acme", Some(5));
    order.insert(&orders).await.unwrap();

    order.set_amount(None::<i32>).set_customer("globex");
    assert_eq!(order.update(&orders).await.unwrap(), 1);

    let stored = orders.find_by_primary_key(10).await.unwrap().unwrap();
    assert_eq!(stored.customer(), "globex");
    assert_eq!(stored.amount(), &Some(5));
}

#[tokio::test]
async fn orders_2023_overwrites_with_null() {
    let store = Arc::new(MemoryDataSource::new());
    let orders = ArchivedOrder::table(&single(&store)).unwrap();

    let mut order = ArchivedOrder {
        id:       None,
        customer: "acme".into(),
        amount:   Some(5)
    };
    order.insert(&orders).await.unwrap();
    let id = order.id().unwrap();

    order.set_amount(None::<i32>);
    order.update(&orders).await.unwrap();

    let stored = orders.find_by_primary_key(id).await.unwrap().unwrap();
    assert_eq!(stored.amount(), &None);
    assert_eq!(store.rows("orders_2023").await.len(), 1);
    assert!(store.rows("orders").await.is_empty());
}

#[tokio::test]
async fn generated_queries_filter_by_value() {
    let store = Arc::new(MemoryDataSource::new());
    let orders = Order::table(&single(&store)).unwrap();

    let mut batch = vec![
        order(None, "acme", Some(5)),
        order(None, "globex", None),
        order(None, "acme", None)
    ];
    Order::insert_all(&orders, &mut batch).await.unwrap();

    let acme = orders.query_by_customer("acme".to_owned()).await.unwrap();
    assert_eq!(acme.len(), 2);
    let five = orders.query_by_amount(5).await.unwrap();
    assert_eq!(five, [batch[0].clone()]);
    let by_key = orders.query_by_id(2).await.unwrap();
    assert_eq!(by_key[0].customer(), "globex");
}

#[tokio::test]
async fn insert_all_rolls_back_on_failure() {
    let store = Arc::new(MemoryDataSource::new());
    let orders = Order::table(&single(&store)).unwrap();

    let mut batch = vec![order(Some(1), "acme", None), order(Some(1), "globex", None)];
    let err = Order::insert_all(&orders, &mut batch).await.unwrap_err();

    assert!(matches!(err, PersistenceError::DuplicateKey { .. }));
    assert_eq!(orders.count().await.unwrap(), 0);
    assert!(!store.in_transaction().await);
}

#[tokio::test]
async fn failed_insert_all_leaves_keys_unassigned() {
    let store = Arc::new(MemoryDataSource::new());
    let orders = Order::table(&single(&store)).unwrap();

    let mut batch = vec![order(None, "acme", None), order(Some(1), "globex", None)];
    let err = Order::insert_all(&orders, &mut batch).await.unwrap_err();

    assert!(matches!(err, PersistenceError::DuplicateKey { .. }));
    assert_eq!(orders.count().await.unwrap(), 0);
    assert_eq!(batch[0].id(), &None);
    assert_eq!(batch[1].id(), &Some(1));
}

#[tokio::test]
async fn delete_of_unsaved_instance_touches_nothing() {
    let store = Arc::new(MemoryDataSource::new());
    let orders = Order::table(&single(&store)).unwrap();
    orders.insert(&mut order(None, "acme", None)).await.unwrap();

    assert_eq!(order(None, "acme", None).delete(&orders).await.unwrap(), 0);
    assert_eq!(orders.count().await.unwrap(), 1);
}

#[tokio::test]
async fn update_all_and_delete_all_count_rows() {
    let store = Arc::new(MemoryDataSource::new());
    let orders = Order::table(&single(&store)).unwrap();

    let mut batch = vec![order(None, "acme", Some(1)), order(None, "globex", Some(2))];
    Order::insert_all(&orders, &mut batch).await.unwrap();

    for order in &mut batch {
        order.set_amount(Some(9_i32));
    }
    assert_eq!(Order::update_all(&orders, &batch).await.unwrap(), 2);
    assert_eq!(orders.query_by_amount(9).await.unwrap().len(), 2);

    assert_eq!(Order::delete_all(&orders, &batch[..1]).await.unwrap(), 1);
    assert_eq!(orders.find_all().await.unwrap(), [batch[1].clone()]);
}

#[tokio::test]
async fn named_data_source_and_store_assigned_key() {
    let support = Arc::new(MemoryDataSource::new());
    let sources = DataSources::builder()
        .register_default(Arc::new(MemoryDataSource::new()))
        .register("support", support.clone())
        .build();
    let tickets = Ticket::table(&sources).unwrap();

    let mut ticket = Ticket {
        id:      Some(42),
        subject: "printer".into()
    };
    ticket.insert(&tickets).await.unwrap();
    assert_eq!(ticket.id(), &Some(1));

    let rows = support.rows("tickets").await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("ticket_no"), Some(&Value::Int(1)));

    let missing = Ticket::table(&DataSources::single(Arc::new(MemoryDataSource::new())));
    assert!(matches!(
        missing,
        Err(PersistenceError::DataSourceNotFound(name)) if name == "support"
    ));
}

#[tokio::test]
async fn unmarked_and_transient_fields_are_not_persisted() {
    assert_eq!(Customer::columns(), ["id", "name", "email"]);
    assert_eq!(Customer::queryable_columns(), ["id", "name"]);

    let store = Arc::new(MemoryDataSource::new());
    let customers = Customer::table(&single(&store)).unwrap();

    let mut customer = Customer {
        id:     1,
        name:   "Ada".into(),
        email:  None,
        draft:  true,
        visits: 3
    };
    customer.insert(&customers).await.unwrap();

    let stored = customers.find_by_primary_key(1).await.unwrap().unwrap();
    assert_eq!(stored.name(), "Ada");
    assert!(!stored.draft());
    assert_eq!(stored.visits(), &0);

    let row = &store.rows("customers").await[0];
    assert_eq!(row.columns().collect::<Vec<_>>(), ["id", "name", "email"]);
}
