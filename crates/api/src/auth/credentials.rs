//! Combined-credential parsing for the login endpoint.
//!
//! The admin console sends a single `username-password` string. The first
//! dash splits the two halves, so passwords may themselves contain dashes
//! but usernames may not.

/// Parse `username-password` into its halves.
///
/// Returns `None` when the separator is missing, when either half is
/// empty, or when the halves are implausibly short (username under 2
/// characters, password under 3).
pub fn parse_credentials(input: &str) -> Option<(&str, &str)> {
    let dash = input.find('-')?;
    if dash == 0 || dash == input.len() - 1 {
        return None;
    }

    let (username, password) = (&input[..dash], &input[dash + 1..]);
    if username.len() < 2 || password.len() < 3 {
        return None;
    }

    Some((username, password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_dash() {
        assert_eq!(parse_credentials("admin-secret"), Some(("admin", "secret")));
    }

    #[test]
    fn password_may_contain_dashes() {
        assert_eq!(
            parse_credentials("admin-pass-with-dashes"),
            Some(("admin", "pass-with-dashes"))
        );
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(parse_credentials("adminsecret"), None);
    }

    #[test]
    fn rejects_empty_halves() {
        assert_eq!(parse_credentials("-secret"), None);
        assert_eq!(parse_credentials("admin-"), None);
    }

    #[test]
    fn rejects_too_short_halves() {
        assert_eq!(parse_credentials("a-secret"), None);
        assert_eq!(parse_credentials("admin-ab"), None);
    }
}
