use thiserror::Error;

/// One variant per form rule; the display text is the alert the screen shows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Email: Must be a valid email address.")]
    Email,
    #[error(
        "Invalid Password: Must be 5-12 characters, include at least one uppercase letter, one lowercase letter, and one digit."
    )]
    Password,
    #[error("Invalid Confirm Password: Confirm Password and Password must be same.")]
    ConfirmPassword,
    #[error("Invalid Username: Username must be between 2 and 15 characters.")]
    Username,
    #[error("Invalid About Me: About Me must be between 25 and 500 characters.")]
    AboutMe,
    #[error("Invalid Time: Please enter a valid start and end time in HH:MM format.")]
    ActivityHour,
}

/// `local@domain.tld`: no whitespace, one `@`, and a dot somewhere inside the
/// domain with at least one character on each side.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |part: &str| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx + 1 < domain.len())
}

/// 5-12 letters/digits with at least one uppercase, one lowercase and one
/// digit. Punctuation is rejected wholesale.
pub fn validate_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(5..=12).contains(&len) {
        return false;
    }
    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn validate_username(username: &str) -> bool {
    (2..=15).contains(&username.chars().count())
}

/// Empty is fine; anything typed must be a real blurb.
pub fn validate_about_me(about_me: &str) -> bool {
    about_me.is_empty() || (25..=500).contains(&about_me.chars().count())
}

/// Mirrors a per-keystroke time box filter: non-time
/// characters are dropped, a `:` is slotted in after two leading digits, and
/// input stops at 5 characters. "1230" comes out as "12:30".
pub fn sanitize_time_input(raw: &str) -> String {
    let mut out = String::new();
    for c in raw.chars() {
        if !(c.is_ascii_digit() || c == ':') {
            continue;
        }
        if out.len() >= 5 {
            break;
        }
        if c == ':' && out.ends_with(':') {
            continue;
        }
        out.push(c);
        if out.len() == 2 && !out.ends_with(':') {
            out.push(':');
        }
    }
    out
}

/// 1-2 digit hour, literal `:`, exactly 2-digit minute; hour in [0,24),
/// minute in [0,60). Sanitization produces this shape but does not enforce it.
pub fn validate_activity_hour(hour: &str) -> bool {
    let Some((h, m)) = hour.split_once(':') else {
        return false;
    };
    if h.is_empty() || h.len() > 2 || !h.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if m.len() != 2 || !m.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let (Ok(hour_num), Ok(minute_num)) = (h.parse::<u32>(), m.parse::<u32>()) else {
        return false;
    };
    hour_num < 24 && minute_num < 60
}
