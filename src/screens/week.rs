use chrono::Local;
use inquire::Select;

use crate::clients::store_client::UserStore;
use crate::models::activity::WeekPlan;
use crate::service::plan_service::PlanService;
use crate::service::week_service;
use crate::session::Session;

/// Monday-to-Saturday list of the user's activities, bucketed by weekday
/// name, with week navigation.
pub async fn week_screen(store: &dyn UserStore, session: &mut Session) {
    let Some(user_id) = session.user_id() else {
        println!("You are not loggined in! Login in on the account screen!");
        return;
    };

    let mut current = Local::now().date_naive();
    loop {
        let (start, end) = week_service::week_range(current);
        println!(
            "\n{} - {}",
            week_service::format_long_date(start),
            week_service::format_long_date(end)
        );
        match PlanService::load_plan(store, user_id).await {
            Ok(plan) => render_week(&plan),
            Err(e) => {
                tracing::warn!("loading weekly activities failed: {e}");
                println!("Error: Could not load user activities, please try again later.");
            }
        }

        let choice = match Select::new(
            "Weekly plan",
            vec!["Add activity", "Previous week", "Next week", "Back"],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(_) => return,
        };
        match choice {
            "Add activity" => {
                // New entries land on the reference date's weekday.
                let day = week_service::weekday_name(current);
                if let Some(activity) = super::prompt_activity(day) {
                    super::save_activity(store, user_id, &activity).await;
                }
            }
            "Previous week" => current = week_service::prev_week(current),
            "Next week" => current = week_service::next_week(current),
            _ => return,
        }
    }
}

fn render_week(plan: &[String]) {
    let week = WeekPlan::from_plan(plan);
    for (day, activities) in week.display_days() {
        println!("{}", day);
        for activity in activities {
            println!("  {}", activity.name);
            println!("  {} - {}", activity.start_hour, activity.end_hour);
        }
    }
}
