pub mod bearer_token;
pub mod caller_identity;
pub mod domain_error;
pub mod email;
pub mod email_message;
pub mod one_time_code;
pub mod stored_object;
pub mod user_id;
