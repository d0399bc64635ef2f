use serde::{Deserialize, Serialize};

/// One record of the hosted "Users" collection, fetched and replaced
/// wholesale. Field casing follows the store's legacy JSON shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    pub email: String,
    pub password: String,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "AboutMe", default)]
    pub about_me: String,
    #[serde(rename = "Joined", default)]
    pub joined: i64,
    /// Ordered list of encoded activity lines; insertion order is creation
    /// order. Absent until the first activity is saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<String>>,
}

/// Body of a registration POST. The store assigns the id, and a fresh
/// account carries no plan field at all.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "AboutMe")]
    pub about_me: String,
    #[serde(rename = "Joined")]
    pub joined: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_legacy_field_casing() {
        let raw = r#"{
            "id": 3,
            "email": "a@b.co",
            "password": "Abcde1",
            "UserName": "sam",
            "AboutMe": "",
            "Joined": 1730000000,
            "plan": ["Gym/08:00/09:00/null/Monday"]
        }"#;
        let user: User = serde_json::from_str(raw).expect("user should decode");
        assert_eq!(user.user_name, "sam");
        assert_eq!(user.joined, 1730000000);
        assert_eq!(user.plan.as_deref(), Some(&["Gym/08:00/09:00/null/Monday".to_string()][..]));
    }

    #[test]
    fn missing_plan_stays_absent_on_the_wire() {
        let raw = r#"{"id":1,"email":"a@b.co","password":"Abcde1","UserName":"sam","AboutMe":"","Joined":0}"#;
        let user: User = serde_json::from_str(raw).expect("user should decode");
        assert_eq!(user.plan, None);

        let encoded = serde_json::to_string(&user).expect("user should encode");
        assert!(!encoded.contains("plan"));
        assert!(encoded.contains("UserName"));
    }
}
