use std::sync::mpsc::Receiver;

use tracing::{info, warn};

use crate::app::{App, Focus};
use crate::audio::{AudioPlayer, MediaEvent};
use crate::catalog::{AssetInfo, Catalog, probe_asset};
use crate::config;
use crate::player::Player;

/// Build the catalog, audio thread and app model from `settings`.
pub fn build_app(settings: &config::Settings) -> (App<AudioPlayer>, Receiver<MediaEvent>) {
    let catalog = Catalog::builtin(&settings.catalog.sounds_dir);

    let assets: Vec<AssetInfo> = catalog
        .entries()
        .iter()
        .map(|entry| {
            let info = probe_asset(&entry.asset);
            if !info.exists {
                warn!(track = %entry.name, asset = %entry.asset.display(), "asset not found");
            }
            info
        })
        .collect();

    let (audio_player, media_events) = AudioPlayer::new();
    let mut player = Player::new(catalog, audio_player, settings.playback.initial_volume);

    if let Some(name) = settings.playback.initial_track.as_deref() {
        match player.catalog().position(name) {
            Some(index) => {
                player.select_track(index);
            }
            None => warn!(name, "initial track not in catalog"),
        }
    }
    info!(
        track = %player.selected_entry().name,
        volume = player.volume(),
        "player ready"
    );

    let mut app = App::new(player, settings.controls.volume_step);
    app.focus = Focus::Track(app.player.selected());
    app.set_assets(assets);

    (app, media_events)
}
