use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct ShopPanelRoot;

#[derive(Component)]
pub struct ShopMoneyText;

#[derive(Component)]
pub struct ShopEntryText {
    pub index: usize,
}

#[derive(Component)]
pub struct ShopErrorText;

/// Last balance reported by the economy.
#[derive(Resource, Debug, Default)]
pub struct ShownBalance(pub u32);

const AFFORDABLE: Color = Color::WHITE;
const TOO_EXPENSIVE: Color = Color::srgb(0.9, 0.25, 0.25);

pub fn entry_color(balance: u32, price: u32) -> Color {
    if balance >= price {
        AFFORDABLE
    } else {
        TOO_EXPENSIVE
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_shop_panel(mut commands: Commands, config: Res<ShopConfig>) {
    commands
        .spawn((
            ShopPanelRoot,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(24.0),
                top: Val::Px(24.0),
                width: Val::Px(260.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(6.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.08, 0.08, 0.1, 0.92)),
            BorderColor(Color::srgb(0.45, 0.4, 0.3)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Black Market"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.2)),
            ));
            parent.spawn((
                ShopMoneyText,
                Text::new("Money: 0"),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            for (index, item) in ShopItem::ALL.iter().enumerate() {
                parent.spawn((
                    ShopEntryText { index },
                    Text::new(format!("{} - {} ({})", index + 1, item.label(), config.price(*item))),
                    TextFont {
                        font_size: 15.0,
                        ..default()
                    },
                    TextColor(AFFORDABLE),
                ));
            }
            parent.spawn((
                Text::new("5 - Close"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
            parent.spawn((
                ShopErrorText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TOO_EXPENSIVE),
            ));
        });
}

// ═══════════════════════════════════════════════════════════════════════
// SYNC
// ═══════════════════════════════════════════════════════════════════════

pub fn track_balance(mut events: EventReader<MoneyChangedEvent>, mut shown: ResMut<ShownBalance>) {
    if let Some(ev) = events.read().last() {
        shown.0 = ev.balance;
    }
}

pub fn sync_shop_panel(
    panel: Res<ShopPanel>,
    config: Res<ShopConfig>,
    balance: Res<ShownBalance>,
    mut root: Query<&mut Visibility, With<ShopPanelRoot>>,
    mut money: Query<&mut Text, (With<ShopMoneyText>, Without<ShopErrorText>)>,
    mut entries: Query<(&ShopEntryText, &mut TextColor)>,
    mut error: Query<&mut Text, (With<ShopErrorText>, Without<ShopMoneyText>)>,
) {
    let Ok(mut visibility) = root.get_single_mut() else {
        return;
    };
    let wanted = if panel.is_open() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    if *visibility != wanted {
        *visibility = wanted;
    }
    if !panel.is_open() {
        return;
    }

    if let Ok(mut text) = money.get_single_mut() {
        text.0 = format!("Money: {}", balance.0);
    }
    for (entry, mut color) in &mut entries {
        if let Some(item) = ShopItem::ALL.get(entry.index) {
            color.0 = entry_color(balance.0, config.price(*item));
        }
    }
    if let Ok(mut text) = error.get_single_mut() {
        let message = panel.error.as_ref().map(|m| m.text.as_str()).unwrap_or("");
        if text.0 != message {
            text.0 = message.to_string();
        }
    }
}
