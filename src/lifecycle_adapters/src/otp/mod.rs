pub mod random_otp_generator;

pub use random_otp_generator::RandomOtpGenerator;
