pub mod builder;
pub mod regions;

pub use builder::{ModelInvocation, SYNTHESIS_TEMPERATURE, ToolSettings, build, category_phrase};
pub use regions::regional_context;
