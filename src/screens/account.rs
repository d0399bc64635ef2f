use inquire::{Password, PasswordDisplayMode, Select, Text};

use crate::clients::store_client::UserStore;
use crate::screens::Nav;
use crate::service::account_service::{
    AccountError, AccountService, LoginOutcome, RegisterOutcome, RegistrationForm,
};
use crate::session::Session;

/// Login and registration are alternate modes of one screen; logging in
/// hands the user straight to the calendar.
pub async fn account_screen(store: &dyn UserStore, session: &mut Session) -> Nav {
    loop {
        let mut options = if session.is_logged_in() {
            vec!["Logout"]
        } else {
            vec!["Login", "Create account"]
        };
        options.push("Back");

        let choice = match Select::new("Account", options).prompt() {
            Ok(choice) => choice,
            Err(_) => return Nav::Back,
        };
        match choice {
            "Login" => {
                if login(store, session).await {
                    return Nav::ToCalendar;
                }
            }
            "Create account" => register(store).await,
            "Logout" => logout(session),
            _ => return Nav::Back,
        }
    }
}

async fn login(store: &dyn UserStore, session: &mut Session) -> bool {
    let Ok(user_name) = Text::new("Username:").prompt() else {
        return false;
    };
    let Ok(password) = Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
    else {
        return false;
    };

    match AccountService::login(store, &user_name, &password).await {
        Ok(LoginOutcome::LoggedIn(user_id)) => {
            session.log_in(user_id);
            true
        }
        Ok(LoginOutcome::WrongCredentials) => {
            println!("Login Failed: Wrong username or password.");
            false
        }
        Err(e) => {
            tracing::warn!("login request failed: {e}");
            println!("Error: Could not login, please try again later.");
            false
        }
    }
}

async fn register(store: &dyn UserStore) {
    let Ok(email) = Text::new("Email:").prompt() else {
        return;
    };
    let Ok(password) = Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
    else {
        return;
    };
    let Ok(confirm_password) = Password::new("Confirm Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
    else {
        return;
    };
    let Ok(user_name) = Text::new("Username:").prompt() else {
        return;
    };
    let Ok(about_me) = Text::new("About Me: (optional)").prompt() else {
        return;
    };

    let form = RegistrationForm {
        email,
        password,
        confirm_password,
        user_name,
        about_me,
    };
    match AccountService::register(store, &form).await {
        Ok(RegisterOutcome::Created) => println!("User added successfully"),
        Ok(RegisterOutcome::UsernameTaken) => {
            println!("Username Taken: This Username is used by another user.")
        }
        Err(AccountError::Validation(e)) => println!("{}", e),
        Err(AccountError::Store(e)) => {
            tracing::warn!("registration request failed: {e}");
            println!("Error: Could not create user, please try again later.");
        }
    }
}

/// Purely local; the store never hears about logouts.
fn logout(session: &mut Session) {
    session.log_out();
    println!("Logout Successful: You have been logged out.");
}
