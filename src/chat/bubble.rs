use bevy::prelude::*;
use crate::shared::*;

/// Where a bubble sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BubbleAnchor {
    /// Placed once; later anchor motion is ignored.
    Fixed(Vec3),
    /// Re-positioned at `target + offset` every frame until released.
    Follow { target: Entity, offset: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BubblePhase {
    /// Parked in the pool.
    Idle,
    Typing { elapsed: f32 },
    Holding { remaining: f32 },
    Fading { elapsed: f32, start_alpha: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleProgress {
    Running,
    Finished,
}

/// Per-bubble continuation: typed reveal, hold, fade. Advanced once per
/// frame by `advance_chat_bubbles`.
#[derive(Component, Debug, Clone)]
pub struct ChatBubble {
    pub text: String,
    /// Characters currently shown.
    pub revealed: usize,
    pub reveal_interval: f32,
    pub stay: f32,
    pub fade_secs: f32,
    pub alpha: f32,
    pub phase: BubblePhase,
    pub anchor: BubbleAnchor,
    pub slot: Option<ChatSlot>,
}

impl ChatBubble {
    pub fn idle() -> Self {
        Self {
            text: String::new(),
            revealed: 0,
            reveal_interval: 0.0,
            stay: 0.0,
            fade_secs: 0.0,
            alpha: 0.0,
            phase: BubblePhase::Idle,
            anchor: BubbleAnchor::Fixed(Vec3::ZERO),
            slot: None,
        }
    }

    pub fn showing(
        text: String,
        reveal_interval: f32,
        stay: f32,
        fade_secs: f32,
        anchor: BubbleAnchor,
        slot: Option<ChatSlot>,
    ) -> Self {
        Self {
            text,
            revealed: 0,
            reveal_interval,
            stay,
            fade_secs,
            alpha: 1.0,
            phase: BubblePhase::Typing { elapsed: 0.0 },
            anchor,
            slot,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != BubblePhase::Idle
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn visible_text(&self) -> String {
        self.text.chars().take(self.revealed).collect()
    }

    /// Jumps to the fade phase. Ignored once already fading or idle.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, BubblePhase::Typing { .. } | BubblePhase::Holding { .. }) {
            self.phase = BubblePhase::Fading {
                elapsed: 0.0,
                start_alpha: self.alpha,
            };
        }
    }

    /// Advances by `dt` seconds, carrying leftover time across phase
    /// boundaries so large frames do not stall the sequence.
    pub fn advance(&mut self, dt: f32) -> BubbleProgress {
        let mut dt = dt.max(0.0);
        loop {
            match self.phase {
                BubblePhase::Idle => return BubbleProgress::Finished,

                BubblePhase::Typing { elapsed } => {
                    let total = self.char_count();
                    if self.reveal_interval <= 0.0 {
                        self.revealed = total;
                    }
                    if self.revealed >= total {
                        self.phase = BubblePhase::Holding {
                            remaining: self.stay,
                        };
                        continue;
                    }
                    let mut elapsed = elapsed + dt;
                    dt = 0.0;
                    while elapsed >= self.reveal_interval && self.revealed < total {
                        elapsed -= self.reveal_interval;
                        self.revealed += 1;
                    }
                    if self.revealed >= total {
                        dt = elapsed;
                        self.phase = BubblePhase::Holding {
                            remaining: self.stay,
                        };
                        continue;
                    }
                    self.phase = BubblePhase::Typing { elapsed };
                    return BubbleProgress::Running;
                }

                BubblePhase::Holding { remaining } => {
                    if dt >= remaining {
                        dt -= remaining;
                        self.phase = BubblePhase::Fading {
                            elapsed: 0.0,
                            start_alpha: self.alpha,
                        };
                        continue;
                    }
                    self.phase = BubblePhase::Holding {
                        remaining: remaining - dt,
                    };
                    return BubbleProgress::Running;
                }

                BubblePhase::Fading {
                    elapsed,
                    start_alpha,
                } => {
                    if self.fade_secs <= 0.0 {
                        self.alpha = 0.0;
                        return BubbleProgress::Finished;
                    }
                    let elapsed = elapsed + dt;
                    let t = (elapsed / self.fade_secs).clamp(0.0, 1.0);
                    self.alpha = start_alpha + (0.0 - start_alpha) * t;
                    if t >= 1.0 {
                        return BubbleProgress::Finished;
                    }
                    self.phase = BubblePhase::Fading {
                        elapsed,
                        start_alpha,
                    };
                    return BubbleProgress::Running;
                }
            }
        }
    }

    /// Clears display state so the entity can sit in the pool.
    pub fn reset(&mut self) {
        *self = Self::idle();
    }
}
