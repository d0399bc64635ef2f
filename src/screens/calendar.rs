use chrono::{Local, NaiveDate};
use inquire::{CustomType, Select};

use crate::clients::store_client::UserStore;
use crate::models::activity;
use crate::service::calendar_service::{self, MonthCursor};
use crate::session::Session;

/// The monthly grid plus day lookup and activity entry.
pub async fn calendar_screen(store: &dyn UserStore, session: &mut Session) {
    let Some(user_id) = session.user_id() else {
        println!("You are not loggined in! Login in on the account screen!");
        return;
    };

    let today = Local::now().date_naive();
    let mut cursor = MonthCursor::from_date(today);
    loop {
        render_month(cursor, today);
        let choice = match Select::new(
            "Calendar",
            vec![
                "Show day activities",
                "Add activity",
                "Previous month",
                "Next month",
                "Back",
            ],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(_) => return,
        };
        match choice {
            "Show day activities" => show_day(store, user_id, cursor).await,
            "Add activity" => add_activity(store, user_id, cursor).await,
            "Previous month" => cursor = cursor.prev(),
            "Next month" => cursor = cursor.next(),
            _ => return,
        }
    }
}

/// Adjacent-month cells render parenthesized, today bracketed.
fn render_month(cursor: MonthCursor, today: NaiveDate) {
    println!("\n{}", cursor.title());
    let header: String = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        .iter()
        .map(|day| format!(" {:>2} ", day))
        .collect();
    println!("{}", header);
    for row in calendar_service::month_grid(cursor.year, cursor.month) {
        let cells: String = row
            .iter()
            .map(|&day| {
                if day < 0 {
                    format!("({:>2})", -day)
                } else if calendar_service::is_today(day, cursor, today) {
                    format!("[{:>2}]", day)
                } else {
                    format!(" {:>2} ", day)
                }
            })
            .collect();
        println!("{}", cells);
    }
}

async fn show_day(store: &dyn UserStore, user_id: u64, cursor: MonthCursor) {
    let Ok(day) = CustomType::<u32>::new("Day of month:").prompt() else {
        return;
    };
    let date = calendar_service::date_key(cursor, day);
    match store.get_user(user_id).await {
        Ok(user) => println!(
            "{}",
            activity::activities_text_for_date(user.plan.as_deref(), &date)
        ),
        Err(e) => {
            tracing::warn!("fetching activities failed: {e}");
            println!("An error occurred while retrieving activities.");
        }
    }
}

async fn add_activity(store: &dyn UserStore, user_id: u64, cursor: MonthCursor) {
    let Ok(day) = CustomType::<u32>::new("Day of month:").prompt() else {
        return;
    };
    let Some(activity) = super::prompt_activity(calendar_service::date_key(cursor, day)) else {
        return;
    };
    super::save_activity(store, user_id, &activity).await;
}
