pub mod account;
pub mod calendar;
pub mod week;

use inquire::{Confirm, CustomType, Select, Text};

use crate::clients::store_client::UserStore;
use crate::models::activity::Activity;
use crate::service::plan_service::PlanService;
use crate::service::validation;
use crate::session::Session;

/// Where a screen wants the tab loop to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Back,
    ToCalendar,
}

/// The tab bar: keeps cycling screens until the user quits.
pub async fn run(store: &dyn UserStore, session: &mut Session) {
    loop {
        let choice = match Select::new(
            "Where to?",
            vec!["Account", "Calendar", "Weekly plan", "Quit"],
        )
        .prompt()
        {
            Ok(choice) => choice,
            // Esc or a closed terminal both just quit.
            Err(_) => return,
        };
        match choice {
            "Account" => {
                if account::account_screen(store, session).await == Nav::ToCalendar {
                    calendar::calendar_screen(store, session).await;
                }
            }
            "Calendar" => calendar::calendar_screen(store, session).await,
            "Weekly plan" => week::week_screen(store, session).await,
            _ => return,
        }
    }
}

/// The add-activity form shared by the monthly and weekly screens. `day` is
/// already fixed by the caller (a date string or a weekday name). Returns
/// `None` when the user bails or a time fails validation.
pub(crate) fn prompt_activity(day: String) -> Option<Activity> {
    let name = Text::new("Activity Name:").prompt().ok()?;
    let start_hour = prompt_hour("Start Hour (HH:MM):")?;
    let end_hour = prompt_hour("End Hour (HH:MM):")?;
    let enable = Confirm::new("Enable Notifications?")
        .with_default(false)
        .prompt()
        .ok()?;
    let notifications = if enable {
        Some(
            CustomType::<u32>::new("Notification Time (Minutes before):")
                .prompt()
                .ok()?,
        )
    } else {
        None
    };
    Some(Activity {
        name,
        start_hour,
        end_hour,
        notifications,
        day,
    })
}

fn prompt_hour(label: &str) -> Option<String> {
    let raw = Text::new(label).prompt().ok()?;
    let hour = validation::sanitize_time_input(&raw);
    if !validation::validate_activity_hour(&hour) {
        println!("Invalid Time: Please enter a valid start and end time in HH:MM format.");
        return None;
    }
    Some(hour)
}

pub(crate) async fn save_activity(store: &dyn UserStore, user_id: u64, activity: &Activity) {
    if let Err(e) = PlanService::append_activity(store, user_id, activity).await {
        tracing::warn!("failed to save activity: {e}");
        println!("Error: There was a problem saving your activity. Please try again later.");
    }
}
