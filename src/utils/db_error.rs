//! Classification of PostgreSQL errors.

/// Name of the constraint guarding `(prefix, slug)` uniqueness.
pub const LINK_KEY_CONSTRAINT: &str = "links_prefix_slug_key";

/// Returns true if `e` is a unique violation of the link key constraint.
///
/// Other unique violations are not conflicts in the domain sense and are
/// treated as storage failures.
pub fn is_unique_violation_on_key(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(LINK_KEY_CONSTRAINT))
}
