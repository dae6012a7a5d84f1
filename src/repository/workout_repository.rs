use crate::db::database::{Database, DatabaseTrait};
use crate::dto::workout_dto::{WorkoutCreateDto, WorkoutUpdateDto};
use crate::model::workout::Workout;
use async_trait::async_trait;
use sqlx::types::Json;
use std::sync::Arc;

#[derive(Clone)]
pub struct WorkoutRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[async_trait]
pub trait WorkoutRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;

    async fn insert_workout(&self, payload: &WorkoutCreateDto) -> Result<Workout, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<Workout>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Workout>, sqlx::Error>;

    async fn find_by_difficulty(&self, difficulty: &str) -> Result<Vec<Workout>, sqlx::Error>;

    async fn update_workout(
        &self,
        id: i64,
        payload: &WorkoutUpdateDto,
    ) -> Result<u64, sqlx::Error>;

    async fn delete_workout(&self, id: i64) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl WorkoutRepositoryTrait for WorkoutRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn insert_workout(&self, payload: &WorkoutCreateDto) -> Result<Workout, sqlx::Error> {
        let sql_ret = sqlx::query(
            "INSERT INTO workouts (
				title,
				description,
				difficulty,
				duration_minutes,
				activity_type,
				exercises,
				target_muscles,
				equipment_needed,
				created_by
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.difficulty)
        .bind(payload.duration_minutes)
        .bind(&payload.activity_type)
        .bind(Json(&payload.exercises))
        .bind(Json(&payload.target_muscles))
        .bind(Json(&payload.equipment_needed))
        .bind(payload.created_by)
        .execute(self.db_conn.get_master_pool())
        .await?;

        let workout = sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE id = ?")
            .bind(sql_ret.last_insert_id() as i64)
            .fetch_one(self.db_conn.get_master_pool())
            .await?;
        Ok(workout)
    }

    async fn find_all(&self) -> Result<Vec<Workout>, sqlx::Error> {
        sqlx::query_as::<_, Workout>("SELECT * FROM workouts ORDER BY created_at DESC")
            .fetch_all(self.db_conn.get_slave_pool())
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Workout>, sqlx::Error> {
        sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db_conn.get_slave_pool())
            .await
    }

    async fn find_by_difficulty(&self, difficulty: &str) -> Result<Vec<Workout>, sqlx::Error> {
        sqlx::query_as::<_, Workout>(
            "SELECT * FROM workouts WHERE difficulty = ? ORDER BY created_at DESC",
        )
        .bind(difficulty)
        .fetch_all(self.db_conn.get_slave_pool())
        .await
    }

    async fn update_workout(
        &self,
        id: i64,
        payload: &WorkoutUpdateDto,
    ) -> Result<u64, sqlx::Error> {
        let sql_ret = sqlx::query(
            "UPDATE workouts SET
				title = COALESCE(?, title),
				description = COALESCE(?, description),
				difficulty = COALESCE(?, difficulty),
				duration_minutes = COALESCE(?, duration_minutes),
				exercises = COALESCE(?, exercises),
				target_muscles = COALESCE(?, target_muscles),
				equipment_needed = COALESCE(?, equipment_needed)
			WHERE id = ?",
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.difficulty)
        .bind(payload.duration_minutes)
        .bind(payload.exercises.as_ref().map(Json))
        .bind(payload.target_muscles.as_ref().map(Json))
        .bind(payload.equipment_needed.as_ref().map(Json))
        .bind(id)
        .execute(self.db_conn.get_master_pool())
        .await?;
        Ok(sql_ret.rows_affected())
    }

    async fn delete_workout(&self, id: i64) -> Result<u64, sqlx::Error> {
        let sql_ret = sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(self.db_conn.get_master_pool())
            .await?;
        Ok(sql_ret.rows_affected())
    }
}
