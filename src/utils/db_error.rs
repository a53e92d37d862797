//! Classification of database errors.

/// Name of the unique index guarding `urls.short_url`.
pub const SHORT_CODE_CONSTRAINT: &str = "urls_short_url_key";

/// Returns true if `e` is a unique violation on the short code index.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_collisions() {
        assert!(!is_unique_violation_on_code(&sqlx::Error::PoolTimedOut));
        assert!(!is_unique_violation_on_code(&sqlx::Error::RowNotFound));
    }
}
