// NovaNav services
// Stateless helpers and the settings engine.

pub mod clock;
pub mod icon_resolver;
pub mod search;
pub mod settings_engine;
