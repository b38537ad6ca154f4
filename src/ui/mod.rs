//! Screen-space UI: the centered notice and the merchant panel.

pub mod notice;
pub mod shop_panel;

use bevy::prelude::*;
use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<notice::NoticeDisplay>()
            .init_resource::<shop_panel::ShownBalance>();

        // ─── Notice banner ───
        app.add_systems(Startup, notice::spawn_notice_banner);
        app.add_systems(
            Update,
            (notice::show_notices, notice::animate_notice).chain(),
        );

        // ─── Shop panel, built once prices are loaded ───
        app.add_systems(OnEnter(GameState::Playing), shop_panel::spawn_shop_panel);
        app.add_systems(
            Update,
            (shop_panel::track_balance, shop_panel::sync_shop_panel)
                .chain()
                .in_set(NarrativeSet::Animate),
        );
    }
}
