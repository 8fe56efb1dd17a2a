mod login_config;

pub use login_config::*;
