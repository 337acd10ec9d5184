/// Minimum password length accepted at registration
pub const PASSWORD_MIN_LENGTH: usize = 8;

// =============================================================================
// VALIDATION MESSAGES
// =============================================================================

pub const MSG_PASSWORD_MISMATCH: &str = "Password fields didn't match.";

pub const MSG_USERNAME_TAKEN: &str = "A user with that username already exists.";

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
