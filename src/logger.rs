use log::SetLoggerError;
use std::sync::Once;

use crate::progbase;

static INIT: Once = Once::new();

/// Installs the env_logger backend at the level progbase was configured
/// with. Safe to call more than once, only the first call installs.
pub fn init_logger() -> Result<(), SetLoggerError> {
    INIT.call_once(|| {
        let logger: env_logger::Logger =
            env_logger::Builder::from_env(env_logger::Env::default())
                .filter_level(progbase::log_lvl())
                .build();

        let _ = log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(progbase::log_lvl()));
    });

    Ok(())
}
