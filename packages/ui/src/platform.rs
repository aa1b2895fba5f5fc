//! Platform store and portal constructor.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop / native**: files under `<data_dir>/campus-portal/` via [`store::FileStore`]
//! - **WASM without `web`**: an in-memory [`store::MemoryStore`]

use portal::Portal;
use store::PortalConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The portal type every view works with.
pub type PlatformPortal = Portal<PlatformStore>;

/// Create the platform-appropriate store.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("campus-portal");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Open the portal over the platform store.
///
/// A failed migration or seeding is logged and the portal is returned anyway;
/// the views then work with whatever the store already holds.
pub fn make_portal(config: PortalConfig) -> PlatformPortal {
    let portal = Portal::new(make_store(), config);
    if let Err(e) = portal.prepare() {
        tracing::error!("Failed to prepare portal storage: {e}");
    }
    portal
}
