use bevy::prelude::*;
use thiserror::Error;

use crate::shared::*;
use super::inventory::WeaponInventory;
use super::wallet::Wallet;

/// Why a purchase was refused. The display text is what the shop panel
/// shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Not enough money!")]
    InsufficientFunds { need: u32, have: u32 },
    #[error("Player not found!")]
    PlayerMissing,
    #[error("Player is dead!")]
    PlayerDead,
    #[error("{} is full!", .0.label())]
    InventoryFull(WeaponKind),
}

/// Validates and commits one purchase. On error nothing is modified.
///
/// Checks run in order: funds, then the player (heal) or the stack limit
/// (weapons).
pub fn try_purchase(
    item: ShopItem,
    config: &ShopConfig,
    wallet: &mut Wallet,
    player_health: Option<&mut Health>,
    inventory: &mut WeaponInventory,
) -> Result<ShopItem, PurchaseError> {
    let cost = config.price(item);
    if !wallet.can_afford(cost) {
        return Err(PurchaseError::InsufficientFunds {
            need: cost,
            have: wallet.money,
        });
    }

    match item {
        ShopItem::Heal => {
            let health = player_health.ok_or(PurchaseError::PlayerMissing)?;
            if health.is_dead() {
                return Err(PurchaseError::PlayerDead);
            }
            wallet.spend(cost);
            health.heal(config.heal_amount);
        }
        ShopItem::Weapon(kind) => {
            if inventory.is_full(kind) {
                return Err(PurchaseError::InventoryFull(kind));
            }
            wallet.spend(cost);
            inventory.add_item(kind, 1);
        }
    }
    Ok(item)
}

/// Number keys 1-4 buy the matching entry while the panel is open.
pub fn request_purchases_from_keys(
    input: Res<PlayerInput>,
    panel: Res<ShopPanel>,
    mut requests: EventWriter<PurchaseRequestEvent>,
) {
    if !panel.is_open() {
        return;
    }
    let Some(choice) = input.shop_choice else {
        return;
    };
    if let Some(item) = (choice as usize)
        .checked_sub(1)
        .and_then(|i| ShopItem::ALL.get(i))
    {
        requests.send(PurchaseRequestEvent { item: *item });
    }
}

#[allow(clippy::too_many_arguments)]
pub fn process_purchases(
    mut requests: EventReader<PurchaseRequestEvent>,
    config: Res<ShopConfig>,
    mut wallet: ResMut<Wallet>,
    mut inventory: ResMut<WeaponInventory>,
    mut panel: ResMut<ShopPanel>,
    mut players: Query<&mut Health, With<Player>>,
    mut money_events: EventWriter<MoneyChangedEvent>,
    mut succeeded: EventWriter<PurchaseSucceededEvent>,
    mut failed: EventWriter<PurchaseFailedEvent>,
) {
    for ev in requests.read() {
        let health = players.get_single_mut().ok();
        match try_purchase(
            ev.item,
            &config,
            &mut wallet,
            health.map(|h| h.into_inner()),
            &mut inventory,
        ) {
            Ok(item) => {
                info!(
                    "[Economy] Bought {} for {}. Balance: {}",
                    item.label(),
                    config.price(item),
                    wallet.money
                );
                money_events.send(MoneyChangedEvent {
                    balance: wallet.money,
                });
                succeeded.send(PurchaseSucceededEvent { item });
            }
            Err(error) => {
                info!("[Economy] Cannot buy {}: {:?}", ev.item.label(), error);
                let reason = error.to_string();
                panel.error = Some(ShopMessage {
                    text: reason.clone(),
                    remaining_secs: config.error_message_secs,
                });
                failed.send(PurchaseFailedEvent {
                    item: ev.item,
                    reason,
                });
            }
        }
    }
}

/// Hides the panel's error message once its time runs out.
pub fn expire_shop_message(time: Res<Time>, mut panel: ResMut<ShopPanel>) {
    let Some(message) = panel.error.as_mut() else {
        return;
    };
    message.remaining_secs -= time.delta_secs();
    if message.remaining_secs <= 0.0 {
        panel.error = None;
    }
}
