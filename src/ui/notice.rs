use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// ANIMATION CURVE
// ═══════════════════════════════════════════════════════════════════════

pub const FADE_IN_SECS: f32 = 0.25;
pub const POP_SECS: f32 = 0.35;
pub const FADE_OUT_SECS: f32 = 0.3;
pub const START_SCALE: f32 = 0.5;
pub const END_SCALE: f32 = 0.8;

const BACK_C1: f32 = 1.70158;
const BACK_C3: f32 = BACK_C1 + 1.0;

pub fn ease_out_back(t: f32) -> f32 {
    let u = t - 1.0;
    1.0 + BACK_C3 * u * u * u + BACK_C1 * u * u
}

pub fn ease_in_back(t: f32) -> f32 {
    BACK_C3 * t * t * t - BACK_C1 * t * t
}

/// Fade in with a scale pop, hold, then fade out while shrinking.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeAnimation {
    pub elapsed: f32,
    pub hold_secs: f32,
    pub scale: f32,
}

impl NoticeAnimation {
    pub fn new(hold_secs: f32, scale: f32) -> Self {
        Self {
            elapsed: 0.0,
            hold_secs: hold_secs.max(0.0),
            scale,
        }
    }

    pub fn total_secs(&self) -> f32 {
        POP_SECS + self.hold_secs + FADE_OUT_SECS
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_secs()
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.total_secs());
    }

    /// `(alpha, scale)` at the current time.
    pub fn sample(&self) -> (f32, f32) {
        let t = self.elapsed;
        let fade_out_start = POP_SECS + self.hold_secs;
        if t < POP_SECS {
            let alpha = (t / FADE_IN_SECS).min(1.0);
            let scale = START_SCALE + (self.scale - START_SCALE) * ease_out_back(t / POP_SECS);
            (alpha, scale)
        } else if t < fade_out_start {
            (1.0, self.scale)
        } else {
            let k = ((t - fade_out_start) / FADE_OUT_SECS).clamp(0.0, 1.0);
            let scale = self.scale + (END_SCALE - self.scale) * ease_in_back(k);
            (1.0 - k, scale)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// DISPLAY
// ═══════════════════════════════════════════════════════════════════════

/// Marker for the centered notice node.
#[derive(Component)]
pub struct NoticeBanner;

#[derive(Component)]
pub struct NoticeText;

/// The notice currently on screen. A new notice replaces it outright.
#[derive(Resource, Debug, Default)]
pub struct NoticeDisplay {
    pub message: String,
    pub color: Color,
    pub animation: Option<NoticeAnimation>,
}

pub fn spawn_notice_banner(mut commands: Commands) {
    commands
        .spawn((
            NoticeBanner,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Percent(40.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                NoticeText,
                Text::new(""),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });
}

pub fn show_notices(mut events: EventReader<NoticeEvent>, mut display: ResMut<NoticeDisplay>) {
    // Only the last one matters; each kills the previous.
    if let Some(ev) = events.read().last() {
        display.message = ev.message.clone();
        display.color = ev.color;
        display.animation = Some(NoticeAnimation::new(ev.duration_secs, ev.scale));
    }
}

pub fn animate_notice(
    time: Res<Time>,
    mut display: ResMut<NoticeDisplay>,
    mut banner: Query<(&mut Transform, &mut Visibility), With<NoticeBanner>>,
    mut text: Query<(&mut Text, &mut TextColor), With<NoticeText>>,
) {
    let Ok((mut transform, mut visibility)) = banner.get_single_mut() else {
        return;
    };
    let Some(animation) = display.animation.as_mut() else {
        *visibility = Visibility::Hidden;
        return;
    };
    animation.advance(time.delta_secs());
    let (alpha, scale) = animation.sample();
    let finished = animation.is_finished();

    transform.scale = Vec3::splat(scale);
    *visibility = Visibility::Visible;
    if let Ok((mut text, mut color)) = text.get_single_mut() {
        if text.0 != display.message {
            text.0 = display.message.clone();
        }
        color.0 = display.color.with_alpha(alpha);
    }
    if finished {
        display.animation = None;
        *visibility = Visibility::Hidden;
    }
}
