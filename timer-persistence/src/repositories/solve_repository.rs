use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::entities::{prelude::*, solves};
use crate::error::StoreError;
use crate::repositories::user_repository::model_to_user;
use timer_types::{Solve, User};

pub struct SolveRepository {
    db: DatabaseConnection,
}

/// Client-supplied fields of a new solve. The id and date are set on insert.
#[derive(Debug, Clone)]
pub struct NewSolve {
    pub time: f64,
    pub notes: Option<String>,
    pub scramble_alg: String,
    pub solver_id: Option<Uuid>,
}

/// Partial update of a solve. Only the notes are mutable; `None` leaves them untouched.
#[derive(Debug, Clone, Default)]
pub struct SolveChanges {
    pub notes: Option<String>,
}

impl SolveRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_solve(model: solves::Model) -> Solve {
        Solve {
            id: model.id,
            solver_id: model.solver_id,
            time: model.time,
            notes: model.notes,
            scramble_alg: model.scramble_alg,
            date: model.date,
        }
    }

    pub async fn create(&self, new_solve: NewSolve) -> Result<Solve, StoreError> {
        let solve_model = solves::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            solver_id: ActiveValue::Set(new_solve.solver_id),
            time: ActiveValue::Set(new_solve.time),
            notes: ActiveValue::Set(new_solve.notes),
            scramble_alg: ActiveValue::Set(new_solve.scramble_alg),
            date: ActiveValue::Set(Utc::now()),
        };

        let created = solve_model.insert(&self.db).await?;
        tracing::debug!("Created solve {}", created.id);
        Ok(Self::model_to_solve(created))
    }

    /// Order is whatever the store returns.
    pub async fn find_all(&self) -> Result<Vec<Solve>, StoreError> {
        let models = Solves::find().all(&self.db).await?;
        Ok(models.into_iter().map(Self::model_to_solve).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Solve, StoreError> {
        Solves::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Self::model_to_solve)
            .ok_or(StoreError::NotFound)
    }

    pub async fn update_by_id(&self, id: Uuid, changes: SolveChanges) -> Result<(), StoreError> {
        let Some(notes) = changes.notes else {
            // Nothing to write, but unknown ids are still reported.
            self.find_by_id(id).await?;
            return Ok(());
        };

        let result = Solves::update_many()
            .col_expr(solves::Column::Notes, Expr::value(notes))
            .filter(solves::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let result = Solves::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Resolves the solve's `solver_id`. A dangling reference yields `None`.
    pub async fn find_solver(&self, solve: &Solve) -> Result<Option<User>, StoreError> {
        let Some(solver_id) = solve.solver_id else {
            return Ok(None);
        };

        let user_model = Users::find_by_id(solver_id).one(&self.db).await?;
        Ok(user_model.map(model_to_user))
    }
}
