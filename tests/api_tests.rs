use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_manager::{
    config::EnvironmentConfig,
    create_app,
    repositories::{FleetStore, MemoryFleetStore},
    utils::jwt::{generate_token, JwtConfig},
    AppState,
};

const SECRET: &str = "integration-test-secret";
const ALICE: &str = "user-alice";
const BOB: &str = "user-bob";

struct TestApp {
    router: Router,
    store: Arc<MemoryFleetStore>,
    jwt: JwtConfig,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(MemoryFleetStore::new());
        let config = EnvironmentConfig::for_memory(SECRET);
        let jwt = JwtConfig::from(&config);
        let shared: Arc<dyn FleetStore> = store.clone();
        let router = create_app(AppState::new(shared, config));
        Self { router, store, jwt }
    }

    fn token(&self, user_id: &str) -> String {
        generate_token(user_id, &self.jwt).unwrap()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            let bearer = format!("Bearer {}", self.token(user));
            builder = builder.header(header::AUTHORIZATION, bearer);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn get(&self, uri: &str, user: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(user), None).await
    }

    async fn post(&self, uri: &str, user: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(user), Some(body)).await
    }

    async fn put(&self, uri: &str, user: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(user), Some(body)).await
    }

    async fn delete(&self, uri: &str, user: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(user), None).await
    }

    async fn create_vehicle(&self, user: &str, initial_mileage: i64) -> String {
        let (status, body) = self
            .post(
                "/api/vehicles",
                user,
                json!({
                    "make": "Ford",
                    "model": "Transit",
                    "year": 2019,
                    "licensePlate": "4821-KLM",
                    "initialMileage": initial_mileage
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }
}

fn as_date(value: &Value) -> DateTime<Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

#[tokio::test]
async fn test_health_check_is_public() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_requests_without_valid_token_are_rejected() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/api/vehicles", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let request = Request::builder()
        .uri("/api/dashboard/stats")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let foreign = JwtConfig {
        secret: "some-other-secret".to_string(),
        expiration: 3600,
    };
    let request = Request::builder()
        .uri("/api/vehicles")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", generate_token(ALICE, &foreign).unwrap()),
        )
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.reads(), 0);
}

#[tokio::test]
async fn test_vehicle_round_trip() {
    let app = TestApp::new();
    let id = app.create_vehicle(ALICE, 42000).await;

    let (status, body) = app.get(&format!("/api/vehicles/{id}"), ALICE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["make"], "Ford");
    assert_eq!(body["model"], "Transit");
    assert_eq!(body["year"], 2019);
    assert_eq!(body["licensePlate"], "4821-KLM");
    assert_eq!(body["status"], "active");
    assert_eq!(body["ownerId"], ALICE);
    assert_eq!(body["initialMileage"], 42000);
    assert_eq!(body["currentMileage"], 42000);
    assert_eq!(body["upcomingReminders"], json!([]));
    assert_eq!(body["activePolicy"], Value::Null);

    let (status, list) = app.get("/api/vehicles", ALICE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (_, list) = app.get("/api/vehicles", BOB).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_vehicle_ownership_and_missing_ids() {
    let app = TestApp::new();
    let id = app.create_vehicle(ALICE, 0).await;

    let (status, body) = app.get(&format!("/api/vehicles/{id}"), BOB).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, _) = app.put(&format!("/api/vehicles/{id}"), BOB, json!({"make": "Seat"})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete(&format!("/api/vehicles/{id}"), BOB).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let missing = uuid::Uuid::new_v4();
    let (status, body) = app.get(&format!("/api/vehicles/{missing}"), ALICE).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, body) = app.get("/api/vehicles/not-a-uuid", ALICE).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_vehicle_validation_reports_first_field() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/vehicles", ALICE, json!({"make": "  ", "model": "Vito", "year": 2020}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["field"], "make");

    let (status, body) = app
        .post("/api/vehicles", ALICE, json!({"make": "Mercedes", "model": "Vito", "year": 1700}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "year");

    let (status, body) = app
        .post(
            "/api/vehicles",
            ALICE,
            json!({
                "make": "Mercedes",
                "model": "Vito",
                "year": 2020,
                "initialMileage": 5000,
                "currentMileage": 100
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "currentMileage");

    let (status, body) = app
        .post(
            "/api/vehicles",
            ALICE,
            json!({"make": "Mercedes", "model": "Vito", "year": 2020, "status": "stolen"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    assert_eq!(app.store.writes(), 0);
}

#[tokio::test]
async fn test_vehicle_update_checks_merged_mileage() {
    let app = TestApp::new();
    let id = app.create_vehicle(ALICE, 10000).await;

    let (status, body) = app
        .put(&format!("/api/vehicles/{id}"), ALICE, json!({"currentMileage": 9000}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "currentMileage");

    let (status, body) = app
        .put(
            &format!("/api/vehicles/{id}"),
            ALICE,
            json!({"currentMileage": 12500, "status": "maintenance"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentMileage"], 12500);
    assert_eq!(body["status"], "maintenance");
    assert_eq!(body["make"], "Ford");
}

#[tokio::test]
async fn test_empty_update_returns_current_without_writing() {
    let app = TestApp::new();
    let id = app.create_vehicle(ALICE, 300).await;
    let writes_before = app.store.writes();

    let (status, body) = app.put(&format!("/api/vehicles/{id}"), ALICE, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["initialMileage"], 300);
    assert_eq!(app.store.writes(), writes_before);
}

#[tokio::test]
async fn test_reminder_creation_computes_due_fields() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 10000).await;

    let (status, body) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/reminders"),
            ALICE,
            json!({
                "serviceType": "Oil Change",
                "intervalMileage": 5000,
                "intervalMonths": 1,
                "lastServiceDate": "2024-01-31T08:00:00Z"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    // Sin lastServiceMileage se parte del kilometraje inicial
    assert_eq!(body["nextDueMileage"], 15000);
    assert_eq!(body["lastServiceMileage"], Value::Null);
    assert_eq!(as_date(&body["nextDueDate"]), as_date(&json!("2024-02-29T08:00:00Z")));
    assert_eq!(body["isDismissed"], false);

    let (status, body) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/reminders"),
            ALICE,
            json!({"serviceType": "Inspection"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["nextDueDate"], Value::Null);
    assert_eq!(body["nextDueMileage"], Value::Null);
}

#[tokio::test]
async fn test_reminder_rejects_client_supplied_derived_fields() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 0).await;

    let (status, body) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/reminders"),
            ALICE,
            json!({"serviceType": "Tyres", "intervalMileage": 20000, "nextDueMileage": 1}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "nextDueMileage");

    let (status, body) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/reminders"),
            ALICE,
            json!({"serviceType": "Tyres", "intervalMileage": 0}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "intervalMileage");
}

#[tokio::test]
async fn test_reminder_update_recomputes_schedule() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 1000).await;
    let (_, reminder) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/reminders"),
            ALICE,
            json!({"serviceType": "Brakes", "intervalMileage": 30000}),
        )
        .await;
    let reminder_id = reminder["id"].as_str().unwrap();
    assert_eq!(reminder["nextDueMileage"], 31000);

    let (status, body) = app
        .put(
            &format!("/api/reminders/{reminder_id}"),
            ALICE,
            json!({"lastServiceMileage": 40000, "intervalMileage": 20000}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nextDueMileage"], 60000);

    let (status, body) = app
        .put(
            &format!("/api/reminders/{reminder_id}"),
            ALICE,
            json!({"nextDueDate": "2030-01-01T00:00:00Z"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "nextDueDate");

    let (status, _) = app
        .put(&format!("/api/reminders/{reminder_id}"), BOB, json!({"isDismissed": true}))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete(&format!("/api/reminders/{reminder_id}"), ALICE).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = app.get(&format!("/api/vehicles/{vehicle_id}/reminders"), ALICE).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_vehicle_details_flag_due_reminders() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 50000).await;

    app.post(
        &format!("/api/vehicles/{vehicle_id}/reminders"),
        ALICE,
        json!({"serviceType": "Timing Belt", "intervalMileage": 60000, "lastServiceMileage": 0}),
    )
    .await;
    app.post(
        &format!("/api/vehicles/{vehicle_id}/reminders"),
        ALICE,
        json!({"serviceType": "Oil Change", "intervalMileage": 10000}),
    )
    .await;

    let (status, body) = app.get(&format!("/api/vehicles/{vehicle_id}"), ALICE).await;
    assert_eq!(status, StatusCode::OK);
    let reminders = body["upcomingReminders"].as_array().unwrap();
    assert_eq!(reminders.len(), 2);

    let due_of = |service: &str| {
        reminders
            .iter()
            .find(|r| r["serviceType"] == service)
            .map(|r| r["isDue"].clone())
            .unwrap()
    };
    assert_eq!(due_of("Timing Belt"), json!(false));
    assert_eq!(due_of("Oil Change"), json!(false));

    app.put(&format!("/api/vehicles/{vehicle_id}"), ALICE, json!({"currentMileage": 61000}))
        .await;
    let (_, body) = app.get(&format!("/api/vehicles/{vehicle_id}"), ALICE).await;
    let reminders = body["upcomingReminders"].as_array().unwrap();
    assert!(reminders.iter().all(|r| r["isDue"] == json!(true)));
}

#[tokio::test]
async fn test_service_record_resets_matching_reminders() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 20000).await;
    let (_, reminder) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/reminders"),
            ALICE,
            json!({"serviceType": "Oil Change", "intervalMileage": 10000, "intervalMonths": 12}),
        )
        .await;
    let (_, other) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/reminders"),
            ALICE,
            json!({"serviceType": "Brakes", "intervalMileage": 40000}),
        )
        .await;

    let (status, record) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/records"),
            ALICE,
            json!({
                "date": "2024-05-10T09:00:00Z",
                "mileage": 29500,
                "cost": 8950,
                "description": "Aceite y filtro",
                "provider": "Taller Norte",
                "serviceType": "oil change"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{record}");
    assert_eq!(record["cost"], 8950);

    let (_, reminders) = app.get(&format!("/api/vehicles/{vehicle_id}/reminders"), ALICE).await;
    let reminders = reminders.as_array().unwrap();
    let oil = reminders.iter().find(|r| r["id"] == reminder["id"]).unwrap();
    assert_eq!(oil["lastServiceMileage"], 29500);
    assert_eq!(oil["nextDueMileage"], 39500);
    assert_eq!(as_date(&oil["nextDueDate"]), as_date(&json!("2025-05-10T09:00:00Z")));

    let brakes = reminders.iter().find(|r| r["id"] == other["id"]).unwrap();
    assert_eq!(brakes["nextDueMileage"], 60000);

    let (_, vehicle) = app.get(&format!("/api/vehicles/{vehicle_id}"), ALICE).await;
    assert_eq!(vehicle["currentMileage"], 29500);

    let (_, records) = app.get(&format!("/api/vehicles/{vehicle_id}/records"), ALICE).await;
    assert_eq!(records.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_record_with_lower_mileage_keeps_vehicle_mileage() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 80000).await;

    let (status, _) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/records"),
            ALICE,
            json!({
                "date": "2023-01-01T00:00:00Z",
                "mileage": 1000,
                "cost": 0,
                "description": "Histórico"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, vehicle) = app.get(&format!("/api/vehicles/{vehicle_id}"), ALICE).await;
    assert_eq!(vehicle["currentMileage"], 80000);
}

#[tokio::test]
async fn test_id_only_deletes_check_ownership() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 0).await;
    let now = Utc::now();

    let (status, policy) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/insurance"),
            ALICE,
            json!({
                "provider": "Allianz",
                "policyNumber": "AZ-778812",
                "startDate": now,
                "endDate": now + Duration::days(365),
                "premiumAmount": 61200
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{policy}");
    let policy_id = policy["id"].as_str().unwrap();

    let (_, details) = app.get(&format!("/api/vehicles/{vehicle_id}"), ALICE).await;
    assert_eq!(details["activePolicy"]["id"], policy_id);

    let (status, _) = app.delete(&format!("/api/insurance/{policy_id}"), BOB).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete(&format!("/api/insurance/{}", uuid::Uuid::new_v4()), ALICE).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.delete(&format!("/api/insurance/{policy_id}"), ALICE).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, list) = app.get(&format!("/api/vehicles/{vehicle_id}/insurance"), ALICE).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_policy_update_rechecks_period() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 0).await;

    let (status, body) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/insurance"),
            ALICE,
            json!({
                "provider": "Mapfre",
                "policyNumber": "MP-1",
                "startDate": "2024-06-01T00:00:00Z",
                "endDate": "2024-01-01T00:00:00Z",
                "premiumAmount": 1000
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "endDate");

    let (_, policy) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/insurance"),
            ALICE,
            json!({
                "provider": "Mapfre",
                "policyNumber": "MP-1",
                "startDate": "2024-01-01T00:00:00Z",
                "endDate": "2024-12-31T00:00:00Z",
                "premiumAmount": 1000
            }),
        )
        .await;
    let policy_id = policy["id"].as_str().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/insurance/{policy_id}"),
            ALICE,
            json!({"endDate": "2023-06-01T00:00:00Z"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "endDate");

    let (status, body) = app
        .put(&format!("/api/insurance/{policy_id}"), ALICE, json!({"premiumAmount": 1250}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["premiumAmount"], 1250);
    assert_eq!(body["provider"], "Mapfre");
}

#[tokio::test]
async fn test_transactions_crud_and_dashboard_stats() {
    let app = TestApp::new();
    let van = app.create_vehicle(ALICE, 0).await;
    let truck = app.create_vehicle(ALICE, 0).await;
    app.put(&format!("/api/vehicles/{truck}"), ALICE, json!({"status": "sold"}))
        .await;
    let now = Utc::now();

    let (status, fuel) = app
        .post(
            &format!("/api/vehicles/{van}/transactions"),
            ALICE,
            json!({
                "date": now - Duration::days(3),
                "type": "expense",
                "category": "Fuel",
                "amount": 7540
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{fuel}");
    assert_eq!(fuel["type"], "expense");

    app.post(
        &format!("/api/vehicles/{truck}/transactions"),
        ALICE,
        json!({
            "date": now - Duration::days(10),
            "type": "expense",
            "category": "Tolls",
            "amount": 1200
        }),
    )
    .await;
    app.post(
        &format!("/api/vehicles/{van}/transactions"),
        ALICE,
        json!({
            "date": now - Duration::days(45),
            "type": "expense",
            "category": "Repair",
            "amount": 99000
        }),
    )
    .await;
    app.post(
        &format!("/api/vehicles/{van}/transactions"),
        ALICE,
        json!({
            "date": now - Duration::days(1),
            "type": "income",
            "category": "Delivery",
            "amount": 50000
        }),
    )
    .await;
    app.post(
        &format!("/api/vehicles/{van}/reminders"),
        ALICE,
        json!({"serviceType": "ITV", "intervalMonths": 12}),
    )
    .await;
    app.post(
        &format!("/api/vehicles/{truck}/reminders"),
        ALICE,
        json!({"serviceType": "Oil Change", "intervalMileage": 15000, "isDismissed": true}),
    )
    .await;

    let (status, stats) = app.get("/api/dashboard/stats", ALICE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "totalVehicles": 2,
            "activeVehicles": 1,
            "totalMonthlyExpenses": 8740,
            "upcomingRemindersCount": 1
        })
    );

    let fuel_id = fuel["id"].as_str().unwrap();
    let (status, updated) = app
        .put(&format!("/api/transactions/{fuel_id}"), ALICE, json!({"amount": 8000}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["amount"], 8000);
    assert_eq!(updated["category"], "Fuel");

    let (status, _) = app.delete(&format!("/api/transactions/{fuel_id}"), BOB).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.delete(&format!("/api/transactions/{fuel_id}"), ALICE).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, stats) = app.get("/api/dashboard/stats", ALICE).await;
    assert_eq!(stats["totalMonthlyExpenses"], 1200);

    let (_, empty) = app.get("/api/dashboard/stats", BOB).await;
    assert_eq!(
        empty,
        json!({
            "totalVehicles": 0,
            "activeVehicles": 0,
            "totalMonthlyExpenses": 0,
            "upcomingRemindersCount": 0
        })
    );
}

#[tokio::test]
async fn test_vehicle_delete_cascades() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 0).await;
    let (_, record) = app
        .post(
            &format!("/api/vehicles/{vehicle_id}/records"),
            ALICE,
            json!({
                "date": "2024-03-01T00:00:00Z",
                "mileage": 10,
                "cost": 500,
                "description": "Lavado"
            }),
        )
        .await;
    let record_id = record["id"].as_str().unwrap().to_string();

    let (status, _) = app.delete(&format!("/api/vehicles/{vehicle_id}"), ALICE).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/vehicles/{vehicle_id}"), ALICE).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/api/records/{record_id}"), ALICE).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&format!("/api/vehicles/{vehicle_id}/records"), ALICE).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_expense_overflow_returns_internal_error() {
    let app = TestApp::new();
    let vehicle_id = app.create_vehicle(ALICE, 0).await;
    let huge = i64::MAX / 2 + 10;

    for days_ago in [1, 2] {
        let (status, _) = app
            .post(
                &format!("/api/vehicles/{vehicle_id}/transactions"),
                ALICE,
                json!({
                    "date": Utc::now() - Duration::days(days_ago),
                    "type": "expense",
                    "category": "Leasing",
                    "amount": huge
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.get("/api/dashboard/stats", ALICE).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "An unexpected error occurred");
}
