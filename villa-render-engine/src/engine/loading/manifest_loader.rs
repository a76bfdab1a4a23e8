use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::system_manifest::SystemManifest;
use crate::engine::loading::progress::LoadingProgress;

pub const MANIFEST_PATH: &str = "villa/system_manifest.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SystemManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Insert the manifest resource once the asset resolves. A failed load is
/// recoverable: the viewer falls back to the built-in figures and loading
/// completes either way.
pub fn resolve_manifest(
    mut progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SystemManifest>>,
) {
    if progress.manifest_resolved {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        info!("✓ System manifest loaded from {MANIFEST_PATH}");
        commands.insert_resource(manifest.clone());
        progress.manifest_resolved = true;
        return;
    }

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        warn!("System manifest failed to load ({err}), using built-in defaults");
        commands.insert_resource(SystemManifest::default());
        progress.manifest_resolved = true;
        progress.manifest_failed = true;
    }
}
