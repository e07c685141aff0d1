pub mod environment;
pub mod logging;

pub use environment::{ServiceSettings, coordinates_from_env, get_data_dir};
pub use logging::init_logging;
