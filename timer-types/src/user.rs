use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A user profile as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
}

/// Public projection of a [`User`]. Names, user name and email stay private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SerializedUser {
    pub id: Uuid,
    pub full_name: String,
}

impl User {
    /// Derived on read, never stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn serialize(&self) -> SerializedUser {
        SerializedUser {
            id: self.id,
            full_name: self.full_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: "ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_full_name_joins_first_and_last() {
        assert_eq!(ada().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_serialized_user_only_exposes_id_and_full_name() {
        let user = ada();
        let value = serde_json::to_value(user.serialize()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["id"], user.id.to_string());
        assert_eq!(object["fullName"], "Ada Lovelace");
        assert!(object.get("userName").is_none());
        assert!(object.get("email").is_none());
    }
}
