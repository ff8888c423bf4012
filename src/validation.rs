//! Structural checks that a submitted account or user must pass before it is stored.
//!
//! Each check is all or nothing: the first failing field rejects the whole record.

use std::sync::LazyLock;

use regex::Regex;

use crate::{account::NewAccount, user::NewUser};

// Character classes are spelled out because `\w` and `\d` are Unicode aware in `regex`.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("Invalid name regex pattern"));

static ACCOUNT_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(daily|weekly|biweekly|monthly|yearly)$")
        .expect("Invalid account type regex pattern")
});

static DUE_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9]|[12][0-9]|3[01])$").expect("Invalid due date regex pattern")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9_-]+(?:\.[a-zA-Z0-9_-]+)*)@((?:[a-zA-Z0-9_-]+\.)*[a-zA-Z0-9_][a-zA-Z0-9_-]{0,66})\.([a-z]{2,6}(?:\.[a-z]{2})?)$",
    )
    .expect("Invalid email regex pattern")
});

/// Check whether `account` may be stored.
///
/// The due date is checked as a day of the month written without leading zeros,
/// not against a calendar, so "31" is accepted for every account type.
pub fn validate_account(account: &NewAccount) -> bool {
    account.user_id >= 1
        && NAME_PATTERN.is_match(&account.name)
        && ACCOUNT_TYPE_PATTERN.is_match(&account.account_type)
        && account.minimum_payment <= account.full_amount
        && account.current_payment <= account.full_amount
        && DUE_DATE_PATTERN.is_match(&account.due_date)
}

/// Check whether `user` may be stored.
pub fn validate_user(user: &NewUser) -> bool {
    NAME_PATTERN.is_match(&user.first_name)
        && NAME_PATTERN.is_match(&user.last_name)
        && NAME_PATTERN.is_match(&user.full_name)
        && EMAIL_PATTERN.is_match(&user.email)
}
