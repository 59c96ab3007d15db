//! Host bridge used when the gateway runs without a game server.

use super::{CommandCapture, HostBridge, HostError, ItemStack};

/// Stands in for the game server when the gateway binary runs standalone:
/// the player roster is empty and console dispatch is refused. Static
/// routes keep working, which is enough to exercise a route configuration
/// before deploying it into a live server.
#[derive(Debug, Default)]
pub struct DetachedHost;

impl HostBridge for DetachedHost {
    fn dispatch_command(
        &self,
        _command: &str,
        _capture: &mut CommandCapture,
    ) -> Result<bool, HostError> {
        Err(HostError("no game server attached".to_string()))
    }

    fn online_players(&self) -> Vec<String> {
        Vec::new()
    }

    fn player_inventory(&self, _name: &str) -> Option<Vec<Option<ItemStack>>> {
        None
    }

    fn is_admin(&self, _name: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_host_has_no_players() {
        let host = DetachedHost;
        assert!(host.online_players().is_empty());
        assert!(host.player_inventory("Steve").is_none());
        assert!(!host.is_admin("Steve"));
    }

    #[test]
    fn test_detached_host_refuses_commands() {
        let host = DetachedHost;
        let mut capture = CommandCapture::new();
        let result = host.dispatch_command("list", &mut capture);
        assert!(result.is_err());
        assert_eq!(capture.into_streams(), (None, None));
    }
}
