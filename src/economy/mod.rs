//! Economy domain — wallet, weapon stock and the merchant's purchase flow.
//!
//! All cross-domain communication goes through `crate::shared::*` events and resources.
//! No other domain module is imported here.

use bevy::prelude::*;
use crate::shared::*;

pub mod inventory;
pub mod shop;
pub mod wallet;

pub use inventory::WeaponInventory;
pub use shop::{try_purchase, PurchaseError};
pub use wallet::Wallet;

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Wallet>()
            .init_resource::<WeaponInventory>()
            .init_resource::<ShopPanel>();

        app.add_systems(
            OnEnter(GameState::Playing),
            (wallet::init_wallet, inventory::init_inventory),
        );

        app.add_systems(
            Update,
            (
                wallet::apply_money_grants,
                shop::request_purchases_from_keys,
                shop::process_purchases,
                shop::expire_shop_message,
            )
                .chain()
                .in_set(NarrativeSet::Act),
        );
    }
}
