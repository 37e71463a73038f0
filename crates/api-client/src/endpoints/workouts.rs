//! Strength training endpoints
//!
//! A session belongs to a daily log, holds ordered exercises, and each
//! exercise holds numbered sets. Deleting a session or exercise cascades.

use crate::client::NutritionClient;
use crate::endpoints::common::{flag, MessageResponse};
use crate::error::ApiResult;
use crate::path::ApiPath;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BASE: &str = "/api/workouts";

/// History rows returned when no limit is given
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// Recent exercise names returned when no limit is given
pub const DEFAULT_RECENT_LIMIT: u32 = 15;

/// Workouts API interface
#[derive(Debug, Clone)]
pub struct WorkoutsApi {
    client: NutritionClient,
    user_id: i64,
}

impl WorkoutsApi {
    pub(crate) fn new(client: NutritionClient) -> Self {
        let user_id = client.user_id();
        Self { client, user_id }
    }

    /// Scope requests to another user
    #[must_use]
    pub fn for_user(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    // ---- Sessions ----

    /// POST /api/workouts/sessions
    pub async fn create_session(&self, session: &NewWorkoutSession) -> ApiResult<WorkoutSession> {
        self.client.post(&resource("sessions"), session).await
    }

    /// Sessions of a daily log, latest start first
    ///
    /// GET /api/workouts/sessions/<daily_log_id>
    pub async fn sessions(&self, daily_log_id: i64) -> ApiResult<Vec<WorkoutSession>> {
        self.client.get(&item("sessions", daily_log_id)).await
    }

    /// Rename, annotate or complete a session
    ///
    /// PUT /api/workouts/sessions/<id>
    pub async fn update_session(
        &self,
        id: i64,
        update: &WorkoutSessionUpdate,
    ) -> ApiResult<WorkoutSession> {
        self.client.put(&item("sessions", id), update).await
    }

    /// DELETE /api/workouts/sessions/<id>
    pub async fn delete_session(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&item("sessions", id)).await
    }

    /// Session with its exercises and their sets
    ///
    /// GET /api/workouts/session-details/<id>
    pub async fn session_details(&self, id: i64) -> ApiResult<SessionDetails> {
        self.client.get(&item("session-details", id)).await
    }

    // ---- Exercises ----

    /// POST /api/workouts/exercises
    pub async fn create_exercise(&self, exercise: &NewWorkoutExercise) -> ApiResult<WorkoutExercise> {
        self.client.post(&resource("exercises"), exercise).await
    }

    /// GET /api/workouts/exercises/<session_id>
    pub async fn exercises(&self, session_id: i64) -> ApiResult<Vec<WorkoutExercise>> {
        self.client.get(&item("exercises", session_id)).await
    }

    /// DELETE /api/workouts/exercises/<id>
    pub async fn delete_exercise(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&item("exercises", id)).await
    }

    // ---- Sets ----

    /// POST /api/workouts/sets
    pub async fn create_set(&self, set: &NewWorkoutSet) -> ApiResult<WorkoutSet> {
        self.client.post(&resource("sets"), set).await
    }

    /// GET /api/workouts/sets/<exercise_id>
    pub async fn sets(&self, exercise_id: i64) -> ApiResult<Vec<WorkoutSet>> {
        self.client.get(&item("sets", exercise_id)).await
    }

    /// PUT /api/workouts/sets/<id>
    pub async fn update_set(&self, id: i64, update: &WorkoutSetUpdate) -> ApiResult<WorkoutSet> {
        self.client.put(&item("sets", id), update).await
    }

    /// DELETE /api/workouts/sets/<id>
    pub async fn delete_set(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&item("sets", id)).await
    }

    // ---- History and analytics ----

    /// Past sets of an exercise, matched case-insensitively by name
    ///
    /// GET /api/workouts/history/<name>?user_id=<u>&limit=<n>
    pub async fn history(&self, exercise_name: &str, limit: Option<u32>) -> ApiResult<Value> {
        self.client.get(&self.history_path(exercise_name, limit)).await
    }

    /// Personal records and volume totals for an exercise
    ///
    /// GET /api/workouts/stats/<name>?user_id=<u>
    pub async fn stats(&self, exercise_name: &str) -> ApiResult<ExerciseStats> {
        let path = ApiPath::new(BASE)
            .segment("stats")
            .segment_encoded(exercise_name)
            .query("user_id", self.user_id)
            .build();
        self.client.get(&path).await
    }

    /// Distinct exercise names by last use
    ///
    /// GET /api/workouts/recent-exercises?user_id=<u>&limit=<n>
    pub async fn recent_exercises(&self, limit: Option<u32>) -> ApiResult<Vec<RecentExercise>> {
        let path = ApiPath::new(BASE)
            .segment("recent-exercises")
            .query("user_id", self.user_id)
            .query("limit", limit.unwrap_or(DEFAULT_RECENT_LIMIT))
            .build();
        self.client.get(&path).await
    }

    /// Per-day workout counts and volume over an inclusive range
    ///
    /// GET /api/workouts/daily-summary?user_id=<u>&start_date=<s>&end_date=<e>
    pub async fn daily_summary(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<Value> {
        let path = ApiPath::new(BASE)
            .segment("daily-summary")
            .query("user_id", self.user_id)
            .date_query("start_date", start)
            .date_query("end_date", end)
            .build();
        self.client.get(&path).await
    }

    /// Every session of a day with full details; empty when the day has no log
    ///
    /// GET /api/workouts/by-date/<date>?user_id=<u>
    pub async fn by_date(&self, date: NaiveDate) -> ApiResult<Vec<SessionDetails>> {
        let path = ApiPath::new(BASE)
            .segment("by-date")
            .date_segment(date)
            .query("user_id", self.user_id)
            .build();
        self.client.get(&path).await
    }

    fn history_path(&self, exercise_name: &str, limit: Option<u32>) -> String {
        ApiPath::new(BASE)
            .segment("history")
            .segment_encoded(exercise_name)
            .query("user_id", self.user_id)
            .query("limit", limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
            .build()
    }
}

fn resource(name: &str) -> String {
    ApiPath::new(BASE).segment(name).build()
}

fn item(name: &str, id: i64) -> String {
    ApiPath::new(BASE).segment(name).segment(id).build()
}

/// A training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: i64,
    pub daily_log_id: i64,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
}

/// Body for starting a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewWorkoutSession {
    pub daily_log_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for updating a session. All three fields are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSessionUpdate {
    pub name: Option<String>,
    pub notes: Option<String>,
    /// Timestamp marking the session done
    pub completed_at: Option<String>,
}

/// An exercise within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: i64,
    pub workout_session_id: i64,
    pub exercise_name: String,
    pub exercise_category: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Body for adding an exercise to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkoutExercise {
    pub workout_session_id: i64,
    pub exercise_name: String,
    #[serde(default)]
    pub exercise_category: String,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub notes: String,
}

impl NewWorkoutExercise {
    /// Uncategorized exercise at the given position
    pub fn new(workout_session_id: i64, exercise_name: impl Into<String>, order_index: i64) -> Self {
        Self {
            workout_session_id,
            exercise_name: exercise_name.into(),
            exercise_category: String::new(),
            order_index,
            notes: String::new(),
        }
    }
}

/// One set of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: i64,
    pub workout_exercise_id: i64,
    pub set_number: u32,
    pub reps: u32,
    pub weight_kg: Option<f64>,
    pub rpe: Option<f64>,
    #[serde(default, deserialize_with = "flag")]
    pub completed: bool,
    pub notes: Option<String>,
}

impl WorkoutSet {
    /// Reps times weight; zero for bodyweight sets
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight_kg.unwrap_or(0.0)
    }
}

/// Body for logging a set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkoutSet {
    pub workout_exercise_id: i64,
    pub set_number: u32,
    pub reps: u32,
    pub weight_kg: Option<f64>,
    pub rpe: Option<f64>,
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
}

impl NewWorkoutSet {
    /// Completed set without RPE
    #[must_use]
    pub fn new(workout_exercise_id: i64, set_number: u32, reps: u32, weight_kg: Option<f64>) -> Self {
        Self {
            workout_exercise_id,
            set_number,
            reps,
            weight_kg,
            rpe: None,
            completed: true,
            notes: String::new(),
        }
    }
}

/// Body for editing a set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSetUpdate {
    pub reps: u32,
    pub weight_kg: Option<f64>,
    pub rpe: Option<f64>,
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
}

/// Exercise with its sets, as nested in session details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseWithSets {
    #[serde(flatten)]
    pub exercise: WorkoutExercise,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

/// Session with everything logged in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetails {
    #[serde(flatten)]
    pub session: WorkoutSession,
    #[serde(default)]
    pub exercises: Vec<ExerciseWithSets>,
}

impl SessionDetails {
    /// Total volume over all sets
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .map(WorkoutSet::volume)
            .sum()
    }
}

/// Records for one exercise. Every field is null when it was never done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseStats {
    pub max_weight: Option<f64>,
    pub max_reps: Option<f64>,
    pub max_volume: Option<f64>,
    pub total_sessions: Option<u32>,
    pub total_volume: Option<f64>,
}

/// An exercise name and when it was last trained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentExercise {
    pub exercise_name: String,
    pub exercise_category: Option<String>,
    pub last_used: Option<String>,
}
