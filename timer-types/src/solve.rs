use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A single timed attempt as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solve {
    pub id: Uuid,
    /// Weak reference to the solving user; the solve never owns it.
    pub solver_id: Option<Uuid>,
    pub time: f64,
    pub notes: Option<String>,
    pub scramble_alg: String,
    /// Set once at creation.
    pub date: DateTime<Utc>,
}

/// Public projection of a [`Solve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SerializedSolve {
    pub id: Uuid,
    pub solver_id: Option<Uuid>,
    pub time: f64,
    pub notes: Option<String>,
    pub scramble_alg: String,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
}

impl Solve {
    /// Projects the solve with `date` stamped at serialization time.
    pub fn serialize(&self) -> SerializedSolve {
        self.serialize_at(Utc::now())
    }

    pub fn serialize_at(&self, now: DateTime<Utc>) -> SerializedSolve {
        SerializedSolve {
            id: self.id,
            solver_id: self.solver_id,
            time: self.time,
            notes: self.notes.clone(),
            scramble_alg: self.scramble_alg.clone(),
            date: now,
        }
    }
}
