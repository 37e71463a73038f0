use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;
use skinny_legend_api_client::endpoints::daily_logs::DailyLogUpdate;
use skinny_legend_api_client::endpoints::food_entries::{FoodEntryInput, MealType};
use skinny_legend_api_client::endpoints::weight_logs::NewWeightLog;
use skinny_legend_api_client::endpoints::workouts::NewWorkoutSet;
use skinny_legend_api_client::{ClientConfig, NutritionClient};
use skinny_legend_core::selection::SelectedDate;

fn client_for(server: &MockServer) -> NutritionClient {
    NutritionClient::with_config(ClientConfig::default().with_base_url(server.base_url())).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn log_row(id: i64, day: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": 1,
        "date": day,
        "total_calories": 1200,
        "total_water_ml": 500,
        "exercise_minutes": 0,
        "notes": "",
        "calorie_goal": 2000,
        "protein_target_g": 150,
        "carbs_target_g": 200,
        "fat_target_g": 65,
        "created_at": null
    })
}

#[tokio::test]
async fn test_daily_logs_list_for_default_user() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/daily-logs")
                .query_param("user_id", "1");
            then.status(200).json_body(json!([log_row(2, "2024-03-09"), log_row(1, "2024-03-08")]));
        })
        .await;

    let logs = client_for(&server).daily_logs().list().await.unwrap();

    mock.assert_async().await;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].date, "2024-03-09");
}

#[tokio::test]
async fn test_daily_log_follows_selected_date() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/daily-logs/2024-03-10")
                .query_param("user_id", "1");
            then.status(200).json_body(log_row(3, "2024-03-10"));
        })
        .await;

    let selected = SelectedDate::new(date(2024, 3, 9));
    selected.next_day();
    let log = client_for(&server)
        .daily_logs()
        .get_selected(&selected)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(log.id, 3);
}

#[tokio::test]
async fn test_daily_log_update_sends_all_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/daily-logs/2")
                .json_body(json!({"total_water_ml": 1750.0, "exercise_minutes": null, "notes": "rest day"}));
            then.status(200).json_body(log_row(2, "2024-03-09"));
        })
        .await;

    let update = DailyLogUpdate {
        total_water_ml: Some(1750.0),
        exercise_minutes: None,
        notes: Some("rest day".to_string()),
    };
    client_for(&server).daily_logs().update(2, &update).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_food_entry_create() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/food-entries").json_body(json!({
                "daily_log_id": 2,
                "name": "Oatmeal",
                "calories": 150.0,
                "protein_g": 5.0,
                "carbs_g": 27.0,
                "fat_g": 3.0,
                "meal_type": "breakfast"
            }));
            then.status(201).json_body(json!({
                "id": 30, "daily_log_id": 2, "name": "Oatmeal", "calories": 150,
                "protein_g": 5, "carbs_g": 27, "fat_g": 3, "fiber_g": 4, "sugar_g": 1,
                "meal_type": "breakfast", "image_path": null, "barcode": null,
                "serving_size": "1 serving", "created_at": "2024-03-09 08:00:00"
            }));
        })
        .await;

    let entry = FoodEntryInput::new(2, "Oatmeal", 150.0)
        .with_macros(5.0, 27.0, 3.0)
        .with_meal(MealType::Breakfast);
    let created = client_for(&server).food_entries().create(&entry).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, 30);
    assert_eq!(created.fiber_g, Some(4.0));
}

#[tokio::test]
async fn test_weight_log_delete() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/weight-logs/42");
            then.status(200).json_body(json!({"message": "Weight log deleted"}));
        })
        .await;

    let response = client_for(&server).weight_logs().delete(42).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.message, "Weight log deleted");
}

#[tokio::test]
async fn test_weight_log_range_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/weight-logs")
                .query_param("user_id", "7")
                .query_param("start_date", "2024-01-01")
                .query_param("end_date", "2024-01-31");
            then.status(200).json_body(json!([
                {"id": 1, "user_id": 7, "date": "2024-01-02", "weight_kg": 80.1, "notes": ""},
                {"id": 2, "user_id": 7, "date": "2024-01-09", "weight_kg": 79.4, "notes": null}
            ]));
        })
        .await;

    let logs = client_for(&server)
        .weight_logs()
        .for_user(7)
        .list(Some((date(2024, 1, 1), date(2024, 1, 31))))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].weight_kg, 79.4);
}

#[tokio::test]
async fn test_weight_log_create() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/weight-logs")
                .json_body(json!({"date": "2024-03-09", "weight_kg": 72.0}));
            then.status(201)
                .json_body(json!({"id": 5, "user_id": 1, "date": "2024-03-09", "weight_kg": 72.0, "notes": ""}));
        })
        .await;

    let log = client_for(&server)
        .weight_logs()
        .create(&NewWeightLog::new(72.0).on(date(2024, 3, 9)))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(log.id, 5);
}

#[tokio::test]
async fn test_latest_weight_missing() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/weight-logs/latest");
            then.status(404).json_body(json!({"message": "No weight logs found"}));
        })
        .await;

    let err = client_for(&server).weight_logs().latest().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_workout_history_encodes_exercise_name() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/workouts/history/Bench%20Press")
                .query_param("user_id", "1")
                .query_param("limit", "10");
            then.status(200).json_body(json!([
                {"exercise_name": "Bench Press", "set_number": 1, "reps": 8, "weight_kg": 60, "rpe": null, "date": "2024-03-09"}
            ]));
        })
        .await;

    let history = client_for(&server)
        .workouts()
        .history("Bench Press", None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(history[0]["reps"], 8);
}

#[tokio::test]
async fn test_workout_set_create() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/workouts/sets").json_body(json!({
                "workout_exercise_id": 10,
                "set_number": 2,
                "reps": 5,
                "weight_kg": 100.0,
                "rpe": null,
                "completed": true,
                "notes": ""
            }));
            then.status(201).json_body(json!({
                "id": 77, "workout_exercise_id": 10, "set_number": 2, "reps": 5,
                "weight_kg": 100, "rpe": null, "completed": 1, "notes": ""
            }));
        })
        .await;

    let set = client_for(&server)
        .workouts()
        .create_set(&NewWorkoutSet::new(10, 2, 5, Some(100.0)))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(set.completed);
    assert_eq!(set.volume(), 500.0);
}

#[tokio::test]
async fn test_workouts_by_date_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/workouts/by-date/2024-03-09")
                .query_param("user_id", "1");
            then.status(200).json_body(json!([]));
        })
        .await;

    let sessions = client_for(&server)
        .workouts()
        .by_date(date(2024, 3, 9))
        .await
        .unwrap();
    assert!(sessions.is_empty());
}

#[tokio::test]
async fn test_profile_update_day_targets() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/profile/update-day-targets/2024-03-09")
                .query_param("user_id", "1");
            then.status(200)
                .json_body(json!({"message": "Targets updated successfully", "date": "2024-03-09"}));
        })
        .await;

    let response = client_for(&server)
        .profile()
        .update_day_targets(date(2024, 3, 9))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.date.as_deref(), Some("2024-03-09"));
}

#[tokio::test]
async fn test_recent_foods_default_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/food-entries/recent")
                .query_param("user_id", "1")
                .query_param("limit", "20");
            then.status(200).json_body(json!([
                {"name": "Banana", "calories": 105, "protein_g": 1.3, "carbs_g": 27, "fat_g": 0.4,
                 "fiber_g": 3.1, "sugar_g": 14, "serving_size": "1 medium", "last_used": "2024-03-09 10:00:00"}
            ]));
        })
        .await;

    let foods = client_for(&server).recent_foods().list(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(foods[0].name, "Banana");
}

#[tokio::test]
async fn test_nutrition_history_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/nutrition/history")
                .query_param("user_id", "1")
                .query_param("start_date", "2024-03-01")
                .query_param("end_date", "2024-03-07");
            then.status(200).json_body(json!([]));
        })
        .await;

    let history = client_for(&server)
        .nutrition()
        .history(date(2024, 3, 1), date(2024, 3, 7))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_supplements_recent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/supplements/recent")
                .query_param("user_id", "1");
            then.status(200).json_body(json!([
                {"name": "Magnesium", "dosage": "200 mg", "type": "mineral"}
            ]));
        })
        .await;

    let recent = client_for(&server).supplements().recent().await.unwrap();

    mock.assert_async().await;
    assert_eq!(recent[0].kind.as_deref(), Some("mineral"));
}
