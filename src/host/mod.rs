//! Host application bridge.
//!
//! The gateway never touches game state directly. The embedding host
//! implements [`HostBridge`] and the API handlers call through it.

mod detached;

pub use detached::DetachedHost;

use thiserror::Error;

/// Number of inventory slots exposed per player.
pub const INVENTORY_SLOTS: usize = 36;

/// Failure raised by a host capability.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HostError(pub String);

/// One item occupying an inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStack {
    pub id: i32,
    pub damage: i32,
    pub count: i32,
}

/// Per-invocation sink for console command output.
///
/// Each dispatch gets its own capture, so concurrent executes never share
/// buffers.
#[derive(Debug, Default)]
pub struct CommandCapture {
    out: String,
    err: String,
}

impl CommandCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the captured standard output.
    pub fn write_out(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Append a line to the captured error output.
    pub fn write_err(&mut self, text: &str) {
        self.err.push_str(text);
        self.err.push('\n');
    }

    /// Trimmed captured streams; an empty stream becomes `None`.
    pub fn into_streams(self) -> (Option<String>, Option<String>) {
        (trimmed(&self.out), trimmed(&self.err))
    }
}

fn trimmed(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Capabilities the gateway consumes from the embedding game server.
pub trait HostBridge: Send + Sync {
    /// Dispatch a console command, writing any textual output into
    /// `capture`. Returns whether the command reported success.
    fn dispatch_command(
        &self,
        command: &str,
        capture: &mut CommandCapture,
    ) -> Result<bool, HostError>;

    /// Names of currently connected players, in no guaranteed order.
    fn online_players(&self) -> Vec<String>;

    /// The player's inventory ([`INVENTORY_SLOTS`] entries, `None` for an
    /// empty slot), or `None` when no player with this exact name is
    /// connected.
    fn player_inventory(&self, name: &str) -> Option<Vec<Option<ItemStack>>>;

    /// Whether the named player holds the operator privilege flag.
    /// A disconnected or unknown player is simply not an operator.
    fn is_admin(&self, name: &str) -> bool;
}
