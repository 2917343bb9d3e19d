mod configuration;
mod logging;
