mod delete_my_account;
mod health;
mod helpers;
mod send_email_otp;
