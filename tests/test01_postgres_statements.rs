use sql_dialect::prelude::*;

fn factory() -> StatementFactory {
    StatementFactory::new(Dialect::Postgres)
}

#[test]
fn insert_routes_values_to_indexed_markers() -> Result<(), SqlDialectError> {
    let insert = factory().insert_and_return_generated_keys("legoset", ["id", "name", "manual"]);
    assert_eq!(
        insert.to_query(),
        "INSERT INTO legoset (id,name,manual) VALUES($1,$2,$3) RETURNING *"
    );

    let mut params = BoundParams::new();
    insert.bind(&mut params, "id", RowValues::Int(42055))?;
    insert.bind(&mut params, "name", RowValues::Text("X".into()))?;
    insert.bind_null(&mut params, "manual", ValueType::Int)?;

    let placeholders: Vec<(&str, &str)> = insert
        .markers()
        .map(|(name, marker)| (name, marker.placeholder()))
        .collect();
    assert_eq!(
        placeholders,
        [("id", "$1"), ("name", "$2"), ("manual", "$3")]
    );

    assert_eq!(
        params.get_index(0),
        Some(&BoundValue::Value(RowValues::Int(42055)))
    );
    assert_eq!(
        params.get_index(1),
        Some(&BoundValue::Value(RowValues::Text("X".into())))
    );
    assert_eq!(params.get_index(2), Some(&BoundValue::Null(ValueType::Int)));
    Ok(())
}

#[test]
fn insert_placeholders_follow_column_order() {
    let columns = ["c0", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10"];
    let insert = factory().insert_and_return_generated_keys("t", columns);
    let query = insert.to_query();

    let values = query
        .split("VALUES(")
        .nth(1)
        .and_then(|rest| rest.split(')').next())
        .unwrap();
    let placeholders: Vec<&str> = values.split(',').collect();

    assert_eq!(placeholders.len(), columns.len());
    for (i, placeholder) in placeholders.iter().enumerate() {
        assert_eq!(*placeholder, format!("${}", i + 1));
    }
}

#[test]
fn update_allocates_id_marker_first() -> Result<(), SqlDialectError> {
    let update = factory().update_by_id("legoset", ["name", "manual"], "id");
    assert_eq!(
        update.to_query(),
        "UPDATE legoset SET name=$2, manual=$3 WHERE id = $1"
    );

    let mut params = BoundParams::new();
    update.bind_id(&mut params, RowValues::Int(42055))?;
    update.bind(&mut params, "name", RowValues::Text("SCHAUFELRADBAGGER".into()))?;
    update.bind(&mut params, "manual", RowValues::Int(13))?;

    let ordered = params.positional()?;
    assert_eq!(ordered[0], &BoundValue::Value(RowValues::Int(42055)));
    assert_eq!(ordered[2], &BoundValue::Value(RowValues::Int(13)));
    Ok(())
}

#[test]
fn select_by_id_with_and_without_limit() -> Result<(), SqlDialectError> {
    let select = factory().select_by_id("legoset", ["id", "name", "manual"], "id");
    assert_eq!(
        select.to_query(),
        "SELECT id, name, manual FROM legoset WHERE id = $1"
    );

    let limited = factory().select_by_id_with_limit("legoset", ["id", "name"], "id", 10)?;
    assert_eq!(
        limited.to_query(),
        "SELECT id, name FROM legoset WHERE id = $1 LIMIT 10"
    );
    assert_eq!(limited.id_marker().placeholder(), "$1");
    Ok(())
}

#[test]
fn select_has_no_named_markers() {
    let select = factory().select_by_id("legoset", ["id", "name"], "id");
    let mut params = BoundParams::new();

    assert_eq!(
        select.bind(&mut params, "name", RowValues::Text("X".into())),
        Err(SqlDialectError::UnknownBindName("name".into()))
    );
    assert_eq!(
        select.bind(&mut params, "id", RowValues::Int(1)),
        Err(SqlDialectError::UnknownBindName("id".into()))
    );
    assert!(params.is_empty());
}

#[test]
fn rendering_is_idempotent_across_bindings() -> Result<(), SqlDialectError> {
    let insert = factory().insert_and_return_generated_keys("legoset", ["id", "name"]);
    let before = insert.to_query().to_string();

    // One operation, a batch of independent statements.
    for id in 0..3 {
        let mut params = BoundParams::new();
        insert.bind(&mut params, "id", RowValues::Int(id))?;
        insert.bind(&mut params, "name", RowValues::Text(format!("set {id}")))?;
        assert_eq!(params.len(), 2);
        assert_eq!(insert.to_query(), before);
    }
    Ok(())
}

#[test]
fn insert_values_binds_collected_values() -> Result<(), SqlDialectError> {
    let values = InsertValues::new()
        .value("id", RowValues::Int(42055))
        .value("name", RowValues::Text("SCHAUFELRADBAGGER".into()))
        .null_value("manual", ValueType::Int);

    let mut params = BoundParams::new();
    let insert = factory().insert_values("legoset", &values, &mut params)?;

    assert_eq!(
        insert.to_query(),
        "INSERT INTO legoset (id,name,manual) VALUES($1,$2,$3) RETURNING *"
    );
    assert_eq!(params.positional()?.len(), 3);
    assert_eq!(params.get_index(2), Some(&BoundValue::Null(ValueType::Int)));

    let empty = factory().insert_values("legoset", &InsertValues::new(), &mut params);
    assert!(matches!(empty, Err(SqlDialectError::ParameterError(_))));
    Ok(())
}

#[test]
fn postgres_params_follow_marker_indices() -> Result<(), SqlDialectError> {
    let update = factory().update_by_id("legoset", ["name"], "id");
    let mut bound = BoundParams::new();
    update.bind(&mut bound, "name", RowValues::Text("X".into()))?;
    update.bind_id(&mut bound, RowValues::Int(1))?;

    let params = PostgresParams::convert(&bound)?;
    assert_eq!(params.as_refs().len(), 2);
    Ok(())
}

#[test]
fn legoset_values_encode_for_integer_columns() -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
    use tokio_postgres::types::{ToSql, Type};
    use tokio_util::bytes::BytesMut;

    let insert = factory().insert_and_return_generated_keys("legoset", ["id", "name", "manual"]);
    let mut bound = BoundParams::new();
    insert.bind(&mut bound, "id", RowValues::Int(42055))?;
    insert.bind(&mut bound, "name", RowValues::Text("SCHAUFELRADBAGGER".into()))?;
    insert.bind_null(&mut bound, "manual", ValueType::Int)?;

    // legoset (id integer, name varchar(255), manual integer)
    let column_types = [Type::INT4, Type::VARCHAR, Type::INT4];
    let params = PostgresParams::convert(&bound)?;
    let mut written = Vec::new();
    for (param, ty) in params.as_refs().iter().zip(&column_types) {
        let mut out = BytesMut::new();
        param.to_sql_checked(ty, &mut out)?;
        written.push(out.len());
    }

    assert_eq!(written, [4, "SCHAUFELRADBAGGER".len(), 0]);
    Ok(())
}
