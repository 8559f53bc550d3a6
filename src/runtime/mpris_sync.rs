use crate::app::App;
use crate::audio::MediaOutput;
use crate::mpris::MprisHandle;

pub fn update_mpris<M: MediaOutput>(mpris: &MprisHandle, app: &App<M>) {
    let index = app.player.selected();
    let duration = app.asset_info(index).and_then(|info| info.duration);
    mpris.set_track_metadata(index, app.player.selected_entry(), duration);
    mpris.set_playback(app.player.playback());
}
