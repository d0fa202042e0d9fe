use async_graphql::Variables;
use galley::config::LimitSettings;
use galley::error::GalleyError;
use galley::graphql::{Gql, VENDORS_MAX_PAGE_SIZE};
use galley::model::Vendor;
use galley::storage::{Dataset, Store};
use serde_json::{Value, json};

fn sample_gql() -> Gql {
    let store = Store::from_dataset(Dataset::sample()).unwrap();
    Gql::from_store(store, &LimitSettings::default())
}

/// Sample kitchen plus enough vendors to span several pages.
fn many_vendors_gql(count: i64) -> Gql {
    let mut dataset = Dataset::sample();
    let first_extra = dataset.vendors.len() as i64 + 1;
    dataset.vendors.extend(
        (first_extra..first_extra + count).map(|id| Vendor::new(id, format!("Vendor {}", id))),
    );
    Gql::from_store(Store::from_dataset(dataset).unwrap(), &LimitSettings::default())
}

fn edge_names(vendors: &Value) -> Vec<String> {
    vendors["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["node"]["name"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Query root
// =============================================================================

#[tokio::test]
async fn test_recipes_with_ingredients() {
    let data = sample_gql()
        .query("{ recipes { title ingredients { name } } }")
        .await
        .unwrap();

    assert_eq!(
        data["recipes"],
        json!([
            { "title": "Omelette", "ingredients": [{ "name": "Egg" }, { "name": "Butter" }] },
            { "title": "Tomato Soup", "ingredients": [{ "name": "Tomato" }, { "name": "Salt" }] },
            { "title": "Sauce Espagnole", "ingredients": [{ "name": "Veal Stock" }, { "name": "Carrot" }] },
        ])
    );
}

#[tokio::test]
async fn test_restaurant_with_owner() {
    let data = sample_gql()
        .query("{ restaurant(id: 1) { id name owner { email } } }")
        .await
        .unwrap();

    assert_eq!(
        data["restaurant"],
        json!({
            "id": "1",
            "name": "The Analytical Kitchen",
            "owner": { "email": "ada@example.com" },
        })
    );
}

#[tokio::test]
async fn test_missing_restaurant_is_null() {
    let data = sample_gql()
        .query("{ restaurant(id: 99) { name } }")
        .await
        .unwrap();

    assert_eq!(data["restaurant"], Value::Null);
}

#[tokio::test]
async fn test_restaurant_recipes_come_from_owner() {
    let data = sample_gql()
        .query("{ restaurant(id: 2) { recipes { title } owner { recipes { title } } } }")
        .await
        .unwrap();

    let restaurant = &data["restaurant"];
    assert_eq!(restaurant["recipes"], json!([{ "title": "Sauce Espagnole" }]));
    assert_eq!(restaurant["recipes"], restaurant["owner"]["recipes"]);
}

#[tokio::test]
async fn test_ingredient_vendor_traversal() {
    let data = sample_gql()
        .query("{ recipes { ingredients { name quantity vendor { name ingredients { name } } } } }")
        .await
        .unwrap();

    let soup = &data["recipes"][1]["ingredients"];
    assert_eq!(soup[0]["name"], "Tomato");
    assert_eq!(soup[0]["quantity"], 6);
    assert_eq!(soup[0]["vendor"]["name"], "Green Valley Produce");
    assert_eq!(
        soup[0]["vendor"]["ingredients"],
        json!([{ "name": "Tomato" }, { "name": "Carrot" }])
    );

    // Salt has no vendor
    assert_eq!(soup[1]["name"], "Salt");
    assert_eq!(soup[1]["vendor"], Value::Null);
}

#[tokio::test]
async fn test_query_with_variables() {
    let data = sample_gql()
        .query_with_variables(
            "query Lookup($id: Int!) { restaurant(id: $id) { name } }",
            Variables::from_json(json!({ "id": 2 })),
        )
        .await
        .unwrap();

    assert_eq!(data["restaurant"]["name"], "Le Guide Culinaire");
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_syntax_error_raises_query_error() {
    let err = sample_gql()
        .query("{ recipes { title ")
        .await
        .unwrap_err();

    match err {
        GalleyError::Query(errors) => assert!(!errors.is_empty()),
        other => panic!("expected query error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_field_raises_query_error() {
    let err = sample_gql()
        .query("{ recipes { calories } }")
        .await
        .unwrap_err();

    let errors = err.query_errors().unwrap();
    assert!(!errors.is_empty());
    assert!(err.to_string().contains("calories"));
}

#[tokio::test]
async fn test_missing_required_argument_raises_query_error() {
    let err = sample_gql()
        .query("{ restaurant { name } }")
        .await
        .unwrap_err();

    assert!(err.query_errors().is_some());
}

#[tokio::test]
async fn test_depth_limit() {
    let store = Store::from_dataset(Dataset::sample()).unwrap();
    let limits = LimitSettings {
        max_depth: Some(2),
        ..LimitSettings::default()
    };
    let gql = Gql::from_store(store, &limits);

    assert!(gql.query("{ recipes { title } }").await.is_ok());
    assert!(
        gql.query("{ recipes { ingredients { vendor { name } } } }")
            .await
            .is_err()
    );
}

// =============================================================================
// Vendors connection
// =============================================================================

#[tokio::test]
async fn test_vendors_first_page() {
    let data = sample_gql()
        .query("{ vendors(first: 2) { edges { node { name } } pageInfo { hasNextPage hasPreviousPage } } }")
        .await
        .unwrap();

    assert_eq!(
        edge_names(&data["vendors"]),
        vec!["Hen House Farm", "Green Valley Produce"]
    );
    assert_eq!(data["vendors"]["pageInfo"]["hasNextPage"], true);
    assert_eq!(data["vendors"]["pageInfo"]["hasPreviousPage"], false);
}

#[tokio::test]
async fn test_vendors_page_size_is_capped() {
    let gql = many_vendors_gql(120);

    for args in ["(first: 500)", "(last: 500)", ""] {
        let data = gql
            .query(&format!("{{ vendors{} {{ edges {{ cursor }} }} }}", args))
            .await
            .unwrap();
        let edges = data["vendors"]["edges"].as_array().unwrap();
        assert_eq!(edges.len(), VENDORS_MAX_PAGE_SIZE, "vendors{}", args);
    }
}

#[tokio::test]
async fn test_vendors_pages_follow_cursor() {
    let gql = many_vendors_gql(57);
    let total = 60;

    let mut seen = Vec::new();
    let mut after: Option<String> = None;
    loop {
        let args = match &after {
            Some(cursor) => format!("(first: 50, after: \"{}\")", cursor),
            None => "(first: 50)".to_string(),
        };
        let data = gql
            .query(&format!(
                "{{ vendors{} {{ edges {{ node {{ id }} }} pageInfo {{ hasNextPage endCursor }} }} }}",
                args
            ))
            .await
            .unwrap();

        let vendors = &data["vendors"];
        let ids: Vec<String> = vendors["edges"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["node"]["id"].as_str().unwrap().to_string())
            .collect();
        assert!(ids.len() <= VENDORS_MAX_PAGE_SIZE);
        seen.extend(ids);

        if vendors["pageInfo"]["hasNextPage"] != true {
            break;
        }
        after = vendors["pageInfo"]["endCursor"].as_str().map(String::from);
    }

    let expected: Vec<String> = (1..=total).map(|id: i64| id.to_string()).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_vendors_nodes_shortcut() {
    let data = sample_gql()
        .query("{ vendors(last: 1) { nodes { name } } }")
        .await
        .unwrap();

    assert_eq!(data["vendors"]["nodes"], json!([{ "name": "Dairy Cooperative" }]));
}

// =============================================================================
// Blocking facade
// =============================================================================

#[test]
fn test_query_blocking() {
    let data = sample_gql()
        .query_blocking("{ restaurant(id: 1) { owner { name } } }")
        .unwrap();
    assert_eq!(data["restaurant"]["owner"]["name"], "Ada Lovelace");

    let err = sample_gql().query_blocking("{").unwrap_err();
    assert!(matches!(err, GalleyError::Query(_)));
}
