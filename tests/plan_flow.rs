use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use plannerApp::clients::store_client::{StoreError, UserStore};
use plannerApp::models::activity::{self, Activity, WeekPlan};
use plannerApp::models::user::{NewUser, User};
use plannerApp::service::plan_service::PlanService;

struct FakeStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for FakeStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, id: u64) -> Result<User, StoreError> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::UnexpectedStatus {
                status: StatusCode::NOT_FOUND,
                body: "not found".to_string(),
            })
    }

    async fn create_user(&self, _user: &NewUser) -> Result<User, StoreError> {
        unimplemented!("plan flows never create users");
    }

    async fn replace_user(&self, user: &User) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user.clone())
            }
            None => Err(StoreError::UnexpectedStatus {
                status: StatusCode::NOT_FOUND,
                body: "not found".to_string(),
            }),
        }
    }
}

fn store_with(plan: Option<Vec<String>>) -> FakeStore {
    FakeStore {
        users: Mutex::new(vec![User {
            id: 1,
            email: "sam@example.co".to_string(),
            password: "Abcde1".to_string(),
            user_name: "sam".to_string(),
            about_me: String::new(),
            joined: 1730000000,
            plan,
        }]),
    }
}

fn gym(day: &str) -> Activity {
    Activity {
        name: "Gym".to_string(),
        start_hour: "08:00".to_string(),
        end_hour: "09:00".to_string(),
        notifications: None,
        day: day.to_string(),
    }
}

#[tokio::test]
async fn first_append_creates_the_plan() {
    let store = store_with(None);
    PlanService::append_activity(&store, 1, &gym("11-15-2024"))
        .await
        .unwrap();

    let plan = PlanService::load_plan(&store, 1).await.unwrap();
    assert_eq!(plan, vec!["Gym/08:00/09:00/null/11-15-2024".to_string()]);
}

#[tokio::test]
async fn appends_keep_creation_order() {
    let store = store_with(Some(vec!["Old/07:00/07:30/null/Monday".to_string()]));
    PlanService::append_activity(&store, 1, &gym("Monday")).await.unwrap();
    let mut call = gym("Tuesday");
    call.name = "Call".to_string();
    call.notifications = Some(5);
    PlanService::append_activity(&store, 1, &call).await.unwrap();

    let plan = PlanService::load_plan(&store, 1).await.unwrap();
    assert_eq!(
        plan,
        vec![
            "Old/07:00/07:30/null/Monday".to_string(),
            "Gym/08:00/09:00/null/Monday".to_string(),
            "Call/08:00/09:00/5/Tuesday".to_string(),
        ]
    );
}

#[tokio::test]
async fn append_for_unknown_user_is_an_error() {
    let store = store_with(None);
    let err = PlanService::append_activity(&store, 99, &gym("Monday")).await;
    assert!(err.is_err());
}

#[tokio::test]
async fn monthly_lookup_and_weekly_buckets_read_the_same_plan() {
    let store = store_with(Some(vec![
        "Gym/08:00/09:00/null/11-15-2024".to_string(),
        "Run/07:00/08:00/10/Monday".to_string(),
        "Rest/12:00/13:00/null/Sunday".to_string(),
    ]));
    let plan = PlanService::load_plan(&store, 1).await.unwrap();

    let text = activity::activities_text_for_date(Some(&plan), "11-15-2024");
    assert_eq!(text, "Activities for 11-15-2024: Gym 08:00 - 09:00");

    let week = WeekPlan::from_plan(&plan);
    assert_eq!(week.activities_for("Monday").len(), 1);
    assert_eq!(
        week.activities_for("Monday")[0].display_line(),
        "Run 07:00 - 08:00 App will notificate 10 minutes before 07:00"
    );
    // Sunday is bucketed but never part of the rendered grid.
    assert_eq!(week.activities_for("Sunday").len(), 1);
    assert!(week.display_days().all(|(day, _)| day != "Sunday"));
}
