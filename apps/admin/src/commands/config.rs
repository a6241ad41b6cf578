//! # Config Commands
//!
//! Commands for retrieving application configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - Dashboard startup (store name, theme)
/// - Currency formatting
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["storeName"], "SchoolCart");
        assert_eq!(json["theme"], "light");
        assert_eq!(json["notificationsEnabled"], true);
        assert_eq!(json["stockAlertDelayMs"], 800);
    }
}
