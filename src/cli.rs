use clap::{Parser, Subcommand};

use crate::clients::store_client::UserStore;
use crate::models::activity;
use crate::screens;
use crate::session::Session;

#[derive(Parser)]
#[command(
    name = "plannerApp",
    about = "Personal activity planner backed by a hosted record store"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive planner: account, monthly calendar and weekly screens.
    Run {},
    /// Print one user's activities for an M-D-YYYY date and exit.
    Activities { user_id: u64, date: String },
}

pub async fn cli(store: &dyn UserStore) {
    // Fine to panic here
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run {}) {
        Commands::Run {} => {
            let mut session = Session::LoggedOut;
            screens::run(store, &mut session).await;
        }
        Commands::Activities { user_id, date } => match store.get_user(user_id).await {
            Ok(user) => println!(
                "{}",
                activity::activities_text_for_date(user.plan.as_deref(), &date)
            ),
            Err(e) => {
                tracing::warn!("fetching activities failed: {e}");
                println!("An error occurred while retrieving activities.");
            }
        },
    }
}
