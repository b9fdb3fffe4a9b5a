pub const CONFIG_FILE: &str = "config/base";
pub const ENV_PREFIX: &str = "SHARPR";
pub const ENV_SEPARATOR: &str = "__";

/// `sub` claim of an administrator session; admins have no provider account.
pub const ADMIN_SESSION_SUBJECT: &str = "admin";

pub mod env {
    pub const SESSION_SECRET_ENV_VAR: &str = "SHARPR__SESSION__SECRET";
    pub const ADMIN_PASSWORD_HASH_ENV_VAR: &str = "SHARPR__ADMIN__PASSWORD_HASH";
    pub const IDENTITY_PROVIDER_API_KEY_ENV_VAR: &str = "SHARPR__IDENTITY_PROVIDER__API_KEY";
    pub const POSTMARK_AUTH_TOKEN_ENV_VAR: &str = "SHARPR__EMAIL_CLIENT__AUTH_TOKEN";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod email_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "noreply@sharpr.org";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
