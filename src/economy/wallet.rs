use bevy::prelude::*;
use crate::shared::*;

/// The player's money.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    pub money: u32,
}

impl Wallet {
    pub fn new(money: u32) -> Self {
        Self { money }
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.money >= cost
    }

    /// Adds `amount`. Negative amounts are refused and leave the balance alone.
    pub fn add_money(&mut self, amount: i64) -> bool {
        if amount < 0 {
            warn!("[Economy] Refusing to add a negative amount ({}).", amount);
            return false;
        }
        let gain = u32::try_from(amount).unwrap_or(u32::MAX);
        self.money = self.money.saturating_add(gain);
        info!("[Economy] Money +{}. Balance: {}", gain, self.money);
        true
    }

    /// Overwrites the balance, clamped at zero.
    pub fn set_money(&mut self, amount: i64) {
        self.money = u32::try_from(amount.max(0)).unwrap_or(u32::MAX);
    }

    /// Deducts `cost` if affordable.
    pub fn spend(&mut self, cost: u32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.money -= cost;
        true
    }
}

pub fn init_wallet(
    config: Res<ShopConfig>,
    mut wallet: ResMut<Wallet>,
    mut money_events: EventWriter<MoneyChangedEvent>,
) {
    wallet.set_money(config.starting_money as i64);
    money_events.send(MoneyChangedEvent {
        balance: wallet.money,
    });
    info!("[Economy] Wallet opened with {}.", wallet.money);
}

pub fn apply_money_grants(
    mut grants: EventReader<GrantMoneyEvent>,
    mut wallet: ResMut<Wallet>,
    mut money_events: EventWriter<MoneyChangedEvent>,
) {
    for ev in grants.read() {
        if wallet.add_money(ev.amount) {
            money_events.send(MoneyChangedEvent {
                balance: wallet.money,
            });
        }
    }
}
