use diesel::prelude::*;

use crate::db::models::plan::{NewTrainingPlan, PlanMetadataChanges, TrainingPlan};

pub struct PlansRepo;

impl PlansRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_plan: &NewTrainingPlan,
    ) -> Result<TrainingPlan, diesel::result::Error> {
        diesel::insert_into(crate::schema::training_plans::table)
            .values(new_plan)
            .get_result(conn)
    }

    /// Every lookup is filtered by the owning user, so a foreign plan id is
    /// indistinguishable from a missing one.
    pub fn find_by_id_for_user(
        conn: &mut PgConnection,
        owner: uuid::Uuid,
        plan_id: uuid::Uuid,
    ) -> Result<Option<TrainingPlan>, diesel::result::Error> {
        use crate::schema::training_plans::dsl::*;
        training_plans
            .filter(id.eq(plan_id))
            .filter(user_id.eq(owner))
            .select(TrainingPlan::as_select())
            .first::<TrainingPlan>(conn)
            .optional()
    }

    pub fn list_for_user(
        conn: &mut PgConnection,
        owner: uuid::Uuid,
        only_active: bool,
    ) -> Result<Vec<TrainingPlan>, diesel::result::Error> {
        use crate::schema::training_plans::dsl::*;
        let mut query = training_plans
            .filter(user_id.eq(owner))
            .select(TrainingPlan::as_select())
            .into_boxed();
        if only_active {
            query = query.filter(is_active.eq(true));
        }
        query
            .order(created_at.desc())
            .load::<TrainingPlan>(conn)
    }

    pub fn update_metadata(
        conn: &mut PgConnection,
        owner: uuid::Uuid,
        plan_id: uuid::Uuid,
        changes: &PlanMetadataChanges,
    ) -> Result<TrainingPlan, diesel::result::Error> {
        use crate::schema::training_plans::dsl::*;
        diesel::update(
            training_plans
                .filter(id.eq(plan_id))
                .filter(user_id.eq(owner)),
        )
        .set(changes)
        .get_result(conn)
    }

    pub fn delete_by_id_for_user(
        conn: &mut PgConnection,
        owner: uuid::Uuid,
        plan_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::training_plans::dsl::*;
        diesel::delete(
            training_plans
                .filter(id.eq(plan_id))
                .filter(user_id.eq(owner)),
        )
        .execute(conn)
    }
}
