pub mod env {
    pub const SUPABASE_URL_ENV_VAR: &str = "SUPABASE_URL";
    pub const SUPABASE_ANON_KEY_ENV_VAR: &str = "SUPABASE_ANON_KEY";
    pub const SUPABASE_SERVICE_ROLE_KEY_ENV_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";
    pub const SUPABASE_JWT_SECRET_ENV_VAR: &str = "SUPABASE_JWT_SECRET";
    pub const RESEND_API_KEY_ENV_VAR: &str = "RESEND_API_KEY";
    pub const ACCOUNT_SERVICE_ADDRESS_ENV_VAR: &str = "ACCOUNT_SERVICE_ADDRESS";
}

pub const SETTINGS_FILE: &str = "config/settings";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod storage {
        pub const BUCKET: &str = "prescriptions";
        pub const PAGE_SIZE: usize = 100;
        pub const MAX_PAGES: usize = 1000;
    }

    pub mod otp {
        pub const FUNCTION: &str = "create_email_otp";
    }

    pub mod email_client {
        pub const BASE_URL: &str = "https://api.resend.com";
        pub const SENDER: &str = "PharmC <onboarding@resend.dev>";
        pub const SUBJECT: &str = "Your PharmC verification code";
        pub const APP_NAME: &str = "PharmC";
    }

    pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const TIMEOUT_IN_MILLIS: u64 = 2_000;
}
