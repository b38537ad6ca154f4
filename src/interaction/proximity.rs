use bevy::prelude::*;
use crate::shared::*;

/// Enter/exit detection against a range widened by `deviation`.
///
/// Starts out of range. Each crossing is reported exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityDetector {
    pub base_range: f32,
    pub deviation: f32,
    in_range: bool,
}

impl ProximityDetector {
    pub fn new(base_range: f32, deviation: f32) -> Self {
        Self {
            base_range,
            deviation,
            in_range: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.base_range + self.deviation
    }

    pub fn in_range(&self) -> bool {
        self.in_range
    }

    /// `None` means the actor is not resolved yet; state is left alone.
    pub fn update(&mut self, distance: Option<f32>) -> Option<RangeEdge> {
        let distance = distance?;
        let now_in_range = distance <= self.threshold();
        match (self.in_range, now_in_range) {
            (false, true) => {
                self.in_range = true;
                Some(RangeEdge::Entered)
            }
            (true, false) => {
                self.in_range = false;
                Some(RangeEdge::Exited)
            }
            _ => None,
        }
    }
}

/// How an interactable advertises itself when the actor walks up.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSettings {
    pub message: String,
    pub speed: ChatSpeed,
    /// Zero keeps the prompt up until it is dismissed or replaced.
    pub stay: f32,
    pub offset: Vec3,
    pub follow: bool,
}

impl PromptSettings {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            speed: ChatSpeed::Fast,
            stay: 0.0,
            offset: Vec3::new(0.0, 2.0, 0.0),
            follow: true,
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }
}

/// Per-controller interaction state.
#[derive(Component, Debug, Clone)]
pub struct Interactable {
    pub detector: ProximityDetector,
    pub prompt: PromptSettings,
    /// Only ever true while in range.
    pub has_shown_prompt: bool,
    pub is_interacting: bool,
}

impl Interactable {
    pub fn new(base_range: f32, deviation: f32, prompt: PromptSettings) -> Self {
        Self {
            detector: ProximityDetector::new(base_range, deviation),
            prompt,
            has_shown_prompt: false,
            is_interacting: false,
        }
    }

    pub fn in_range(&self) -> bool {
        self.detector.in_range()
    }

    fn prompt_request(&self, owner: Entity) -> Option<SendChatEvent> {
        if self.has_shown_prompt || self.prompt.message.is_empty() {
            return None;
        }
        Some(SendChatEvent {
            text: self.prompt.message.clone(),
            talker: Some(owner),
            speed: self.prompt.speed,
            stay: Some(self.prompt.stay),
            offset: Some(self.prompt.offset),
            follow: self.prompt.follow,
            slot: Some(ChatSlot::prompt(owner)),
        })
    }
}

fn planar_distance(a: &Transform, b: &Transform) -> f32 {
    a.translation.truncate().distance(b.translation.truncate())
}

/// Updates every detector against the tracked actor, shows the prompt on
/// entry and resets the latch on exit.
pub fn detect_interaction_range(
    tracked: Res<TrackedActor>,
    actors: Query<&Transform, Without<Interactable>>,
    mut interactables: Query<(Entity, &Transform, &mut Interactable)>,
    mut range_events: EventWriter<InteractionRangeEvent>,
    mut chat_events: EventWriter<SendChatEvent>,
    mut dismiss_events: EventWriter<DismissChatEvent>,
) {
    let actor = tracked.entity.and_then(|e| actors.get(e).ok());

    for (entity, transform, mut interactable) in interactables.iter_mut() {
        let distance = actor.map(|a| planar_distance(a, transform));
        let Some(edge) = interactable.detector.update(distance) else {
            continue;
        };
        range_events.send(InteractionRangeEvent { entity, edge });

        match edge {
            RangeEdge::Entered => {
                if let Some(request) = interactable.prompt_request(entity) {
                    interactable.has_shown_prompt = true;
                    chat_events.send(request);
                }
            }
            RangeEdge::Exited => {
                interactable.has_shown_prompt = false;
                dismiss_events.send(DismissChatEvent {
                    slot: ChatSlot::prompt(entity),
                });
            }
        }
    }
}

/// Sends the interact press to the nearest idle interactable in range.
pub fn route_interact_press(
    input: Res<PlayerInput>,
    tracked: Res<TrackedActor>,
    actors: Query<&Transform, Without<Interactable>>,
    interactables: Query<(Entity, &Transform, &Interactable)>,
    mut interact_events: EventWriter<InteractEvent>,
) {
    if !input.interact {
        return;
    }
    let Some(actor) = tracked.entity.and_then(|e| actors.get(e).ok()) else {
        return;
    };

    let nearest = interactables
        .iter()
        .filter(|(_, _, i)| i.in_range() && !i.is_interacting)
        .map(|(entity, transform, _)| (entity, planar_distance(actor, transform)))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    if let Some((entity, _)) = nearest {
        interact_events.send(InteractEvent { entity });
    } else {
        debug!("[Interaction] Interact pressed with nothing idle in range.");
    }
}
