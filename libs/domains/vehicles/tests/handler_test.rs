//! Handler tests for Vehicles domain

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_vehicles::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn vehicle(id: u32, brand: &str, color: &str, year: i32) -> Vehicle {
    Vehicle {
        id,
        brand: brand.to_string(),
        model: "Model".to_string(),
        registration: format!("REG-{id}"),
        color: color.to_string(),
        year,
        passengers: 4,
        max_speed: 150.0,
        fuel_type: "gasoline".to_string(),
        transmission: "manual".to_string(),
        weight: 1000.0 + f64::from(id) * 100.0,
        height: 1.5,
        length: 4.0,
        width: 1.8,
    }
}

fn app() -> Router {
    let mut ford = vehicle(3, "Ford", "blue", 2018);
    ford.fuel_type = "diesel".to_string();
    ford.transmission = "automatic".to_string();
    ford.passengers = 7;
    ford.max_speed = 210.0;
    ford.length = 5.2;

    let repo = InMemoryVehicleRepository::with_vehicles([
        vehicle(1, "Toyota", "red", 2010),
        vehicle(2, "Toyota", "red", 2015),
        ford,
    ]);
    handlers::router(VehicleService::new(repo))
}

fn new_vehicle(registration: &str) -> Value {
    json!({
        "brand": "Fiat",
        "model": "Uno",
        "registration": registration,
        "color": "white",
        "year": 2001,
        "passengers": 5,
        "max_speed": 140.0,
        "fuel_type": "gasoline",
        "transmission": "manual",
        "weight": 800.0,
        "height": 1.4,
        "length": 3.6,
        "width": 1.5
    })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_vehicles() {
    let response = app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&json_body(response.into_body()).await), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_empty_catalog_is_ok() {
    let app = handlers::router(VehicleService::new(InMemoryVehicleRepository::new()));

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_color_and_year() {
    let app = app();

    let response = app.clone().oneshot(get("/color/RED/year/2015")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&json_body(response.into_body()).await), vec![2]);

    let response = app.clone().oneshot(get("/color/red/year/1990")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        "Not Found - no vehicles found with the given criteria"
    );

    let response = app.oneshot(get("/color/red/year/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_brand_between_years() {
    let response = app()
        .oneshot(get("/brand/toyota/between/2010/2015"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&json_body(response.into_body()).await), vec![1, 2]);
}

#[tokio::test]
async fn test_averages() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/average_speed/brand/Ford"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"brand": "Ford", "average_speed": 210.0})
    );

    let response = app
        .clone()
        .oneshot(get("/average_capacity/brand/Toyota"))
        .await
        .unwrap();
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"brand": "Toyota", "average_capacity": 4.0})
    );

    let response = app
        .oneshot(get("/average_speed/brand/Fiat"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fuel_type_and_transmission() {
    let app = app();

    let response = app.clone().oneshot(get("/fuel_type/Diesel")).await.unwrap();
    assert_eq!(ids(&json_body(response.into_body()).await), vec![3]);

    let response = app.oneshot(get("/transmission/manual")).await.unwrap();
    assert_eq!(ids(&json_body(response.into_body()).await), vec![1, 2]);
}

#[tokio::test]
async fn test_dimensions() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/dimensions?length=5-6&width=1-2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&json_body(response.into_body()).await), vec![3]);

    let response = app.oneshot(get("/dimensions?length=5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weight() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/weight?min=1100&max=1200"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&json_body(response.into_body()).await), vec![1, 2]);

    let response = app.oneshot(get("/weight?min=heavy")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_vehicle() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", &new_vehicle("NEW-1")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Vehicle created");
    assert_eq!(body["data"]["id"], 4);

    let response = app
        .oneshot(json_request("POST", "/", &new_vehicle("NEW-1")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        "Conflict - vehicle with this registration already exists"
    );
}

#[tokio::test]
async fn test_create_invalid_vehicle() {
    let mut body = new_vehicle("NEW-1");
    body["passengers"] = json!(0);

    let response = app()
        .oneshot(json_request("POST", "/", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Bad Request - capacity must be greater than zero");
}

#[tokio::test]
async fn test_batch_is_atomic() {
    let app = app();

    let batch = json!([new_vehicle("B-1"), new_vehicle("REG-1")]);
    let response = app
        .clone()
        .oneshot(json_request("POST", "/batch", &batch))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(ids(&json_body(response.into_body()).await), vec![1, 2, 3]);

    let batch = json!([new_vehicle("B-1"), new_vehicle("B-2")]);
    let response = app
        .oneshot(json_request("POST", "/batch", &batch))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Vehicles created");
    assert_eq!(ids(&body["data"]), vec![4, 5]);
}

#[tokio::test]
async fn test_update_speed() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/1/update_speed", &json!({"max_speed": 99.5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Vehicle updated");
    assert_eq!(body["data"]["max_speed"], 99.5);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/1/update_speed", &json!({"max_speed": -1.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request("PUT", "/99/update_speed", &json!({"max_speed": 10.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_fuel() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/2/update_fuel", &json!({"fuel_type": "electric"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["fuel_type"], "electric");

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/2/update_fuel", &json!({"fuel_type": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // PATCH stays accepted alongside PUT
    let response = app
        .oneshot(json_request("PATCH", "/2/update_fuel", &json!({"fuel_type": "diesel"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["fuel_type"], "diesel");
}

#[tokio::test]
async fn test_delete_vehicle() {
    let app = app();
    let delete = |uri: &str| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(delete("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(delete("/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
