mod system_settings;

pub use system_settings::SystemSettings;
