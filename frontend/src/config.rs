use shared::SignInConfig;

/// Settings baked in at build time, e.g.
/// `SIGNIN_SUBMIT_DELAY_MS=300 trunk build`.
pub fn from_build_env() -> SignInConfig {
    let config = SignInConfig::with_delay_override(option_env!("SIGNIN_SUBMIT_DELAY_MS"));
    log::debug!("sign-in config: {:?}", config);
    config
}
