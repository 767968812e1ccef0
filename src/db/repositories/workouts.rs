use diesel::prelude::*;

use crate::db::enums::EffortLevel;
use crate::db::models::workout::{NewWorkoutLog, WorkoutLog};

pub struct WorkoutsRepo;

impl WorkoutsRepo {
    pub fn insert_batch(
        conn: &mut PgConnection,
        rows: &[NewWorkoutLog],
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(crate::schema::workout_logs::table)
            .values(rows)
            .execute(conn)
    }

    pub fn find_by_id_for_user(
        conn: &mut PgConnection,
        owner: uuid::Uuid,
        workout_id: uuid::Uuid,
    ) -> Result<Option<WorkoutLog>, diesel::result::Error> {
        use crate::schema::workout_logs::dsl::*;
        workout_logs
            .filter(id.eq(workout_id))
            .filter(user_id.eq(owner))
            .select(WorkoutLog::as_select())
            .first::<WorkoutLog>(conn)
            .optional()
    }

    pub fn mark_completed(
        conn: &mut PgConnection,
        owner: uuid::Uuid,
        workout_id: uuid::Uuid,
        distance: Option<f64>,
        duration: Option<i32>,
        effort: Option<EffortLevel>,
        note_text: Option<String>,
    ) -> Result<WorkoutLog, diesel::result::Error> {
        use crate::schema::workout_logs::dsl::*;
        diesel::update(
            workout_logs
                .filter(id.eq(workout_id))
                .filter(user_id.eq(owner)),
        )
        .set((
            actual_distance.eq(distance),
            actual_duration.eq(duration),
            effort_level.eq(effort),
            notes.eq(note_text),
            completed.eq(true),
        ))
        .get_result(conn)
    }

    pub fn list_between(
        conn: &mut PgConnection,
        owner: uuid::Uuid,
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    ) -> Result<Vec<WorkoutLog>, diesel::result::Error> {
        use crate::schema::workout_logs::dsl::*;
        workout_logs
            .filter(user_id.eq(owner))
            .filter(date.ge(from))
            .filter(date.le(to))
            .order(date.asc())
            .select(WorkoutLog::as_select())
            .load::<WorkoutLog>(conn)
    }

}
