//! # Chat Crasher
//!
//! Hooks the press-start menu's SHiFT authentication call, clears the
//! caller's `ShouldStartSparkInitialization` flag, and suppresses the
//! native continuation. The game never brings a SHiFT session online,
//! which keeps the chat subsystem inert and closes its crash/exploit
//! vector.
//!
//! Enabling or disabling only applies from the next launch for sessions
//! where the menu has already passed the authentication call.

use bl2rust_core::host::{Host, HookResult};
use bl2rust_core::sdk::EventId;
use bl2rust_core::{GameMod, ModError, ModKey, ModMeta, ModRegistry, ModType};

/// Owner name the authentication hook is registered under
const HOOK_OWNER: &str = "AlwaysOffline";

pub struct ChatCrasher {
    meta: ModMeta,
}

impl ChatCrasher {
    pub fn new() -> Self {
        Self {
            meta: ModMeta {
                name: "Chat Crasher",
                author: "apple1417",
                description: "Neutralizes the chat subsystem by forcing the game to never \
                              connect to SHiFT.\n\
                              Note that enabling/disabling this mod only applies next time \
                              you launch the game.",
                version: "1.1",
                mod_type: ModType::Utility,
            },
        }
    }
}

impl Default for ChatCrasher {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMod for ChatCrasher {
    fn meta(&self) -> &ModMeta {
        &self.meta
    }

    fn enable(&mut self, host: &mut dyn Host) -> Result<(), ModError> {
        host.install_hook(
            EventId::SparkAuthentication,
            HOOK_OWNER,
            Box::new(|host, ctx| {
                if let Some(movie) = host.press_start_mut(ctx.caller()) {
                    movie.should_start_spark_initialization = false;
                }
                HookResult::Handled
            }),
        );
        tracing::debug!("authentication hook installed");
        Ok(())
    }

    fn disable(&mut self, host: &mut dyn Host) -> Result<(), ModError> {
        host.remove_hook(EventId::SparkAuthentication, HOOK_OWNER);
        tracing::debug!("authentication hook removed");
        Ok(())
    }
}

/// Register the mod, auto-enabling it if its marker file is present
pub fn register(registry: &mut ModRegistry, host: &mut dyn Host) -> Result<ModKey, ModError> {
    registry.register(host, Box::new(ChatCrasher::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bl2rust_core::host::SimHost;
    use bl2rust_core::persist;
    use bl2rust_core::sdk::PressStartMovie;
    use bl2rust_core::ModStatus;

    #[test]
    fn test_enable_forces_offline_and_suppresses_native() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = ModRegistry::new(dir.path());
        let mut host = SimHost::new();
        let key = register(&mut registry, &mut host).unwrap();

        registry.enable(&mut host, key).unwrap();
        let movie = host.spawn_press_start(PressStartMovie::default());
        let native_ran = host.dispatch(EventId::SparkAuthentication, movie);

        assert!(!native_ran);
        let movie = host.press_start(movie).unwrap();
        assert!(!movie.should_start_spark_initialization);
        assert!(!movie.spark_session_started);
    }

    #[test]
    fn test_without_mod_authentication_proceeds() {
        let mut host = SimHost::new();
        let movie = host.spawn_press_start(PressStartMovie::default());
        assert!(host.dispatch(EventId::SparkAuthentication, movie));
        assert!(host.press_start(movie).unwrap().spark_session_started);
    }

    #[test]
    fn test_lifecycle_marker_and_hook() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ChatCrasher").join("ENABLED");
        let mut registry = ModRegistry::new(dir.path());
        let mut host = SimHost::new();
        let key = register(&mut registry, &mut host).unwrap();

        // Fresh install: disabled, no hook, no marker
        assert_eq!(registry.status(key), Some(ModStatus::Disabled));
        assert!(!host.hook_installed(EventId::SparkAuthentication, "AlwaysOffline"));
        assert!(!marker.exists());

        registry.enable(&mut host, key).unwrap();
        assert!(host.hook_installed(EventId::SparkAuthentication, "AlwaysOffline"));
        assert!(marker.exists());

        // Marker already gone is tolerated on disable
        persist::clear_marker(&marker).unwrap();
        registry.disable(&mut host, key).unwrap();
        assert!(!host.hook_installed(EventId::SparkAuthentication, "AlwaysOffline"));
        assert!(!marker.exists());
    }

    #[test]
    fn test_marker_auto_enables_next_launch() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ChatCrasher").join("ENABLED");
        persist::write_marker(&marker).unwrap();

        let mut registry = ModRegistry::new(dir.path());
        let mut host = SimHost::new();
        let key = register(&mut registry, &mut host).unwrap();

        assert_eq!(registry.status(key), Some(ModStatus::Enabled));
        assert!(host.hook_installed(EventId::SparkAuthentication, "AlwaysOffline"));
    }
}
