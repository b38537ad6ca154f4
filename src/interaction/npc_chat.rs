use bevy::prelude::*;
use crate::shared::*;
use super::proximity::Interactable;

/// Pause between one line's hold ending and the next line starting.
pub const LINE_GAP_SECS: f32 = 0.5;

/// Timing for lines spaced `spacing` apart: line `i` is due at
/// `i * spacing`, the whole sequence completes at `count * spacing`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSequence {
    count: usize,
    spacing: f32,
    elapsed: f32,
    next: usize,
    started: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceTick {
    /// Indices of lines that became due during this tick.
    pub due: Vec<usize>,
    pub completed: bool,
}

impl LineSequence {
    pub fn new(count: usize, spacing: f32) -> Self {
        Self {
            count,
            spacing: spacing.max(0.0),
            elapsed: 0.0,
            next: 0,
            started: false,
        }
    }

    pub fn total_secs(&self) -> f32 {
        self.count as f32 * self.spacing
    }

    /// The first tick only releases what is due at time zero, so frame
    /// time spent before the sequence existed is not counted.
    pub fn advance(&mut self, dt: f32) -> SequenceTick {
        if self.started {
            self.elapsed += dt.max(0.0);
        } else {
            self.started = true;
        }
        let mut tick = SequenceTick::default();
        while self.next < self.count && self.elapsed >= self.next as f32 * self.spacing {
            tick.due.push(self.next);
            self.next += 1;
        }
        tick.completed = self.next >= self.count && self.elapsed >= self.total_secs();
        tick
    }
}

/// How dialogue lines are shown.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub speed: ChatSpeed,
    pub stay: f32,
    pub offset: Vec3,
    pub follow: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            speed: ChatSpeed::Normal,
            stay: 3.0,
            offset: Vec3::new(0.0, 2.0, 0.0),
            follow: true,
        }
    }
}

/// Scripted lines an interactable speaks when used.
#[derive(Component, Debug, Clone, Default)]
pub struct DialogueLines {
    pub lines: Vec<String>,
    pub style: LineStyle,
    pub running: Option<LineSequence>,
}

impl DialogueLines {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..default()
        }
    }

    pub fn spacing(&self) -> f32 {
        self.style.stay + LINE_GAP_SECS
    }

    /// Latches the interactable and schedules every line.
    pub fn begin(&mut self, interactable: &mut Interactable) {
        interactable.is_interacting = true;
        self.running = Some(LineSequence::new(self.lines.len(), self.spacing()));
    }

    fn request(&self, owner: Entity, index: usize) -> Option<SendChatEvent> {
        let text = self.lines.get(index)?;
        Some(SendChatEvent {
            text: text.clone(),
            talker: Some(owner),
            speed: self.style.speed,
            stay: Some(self.style.stay),
            offset: Some(self.style.offset),
            follow: self.style.follow,
            slot: Some(ChatSlot::line(owner)),
        })
    }
}

/// Marker for an NPC that talks when interacted with.
#[derive(Component, Debug, Clone, Default)]
pub struct NpcChat;

pub fn start_npc_dialogue(
    mut interact_events: EventReader<InteractEvent>,
    mut npcs: Query<(&mut Interactable, &mut DialogueLines), With<NpcChat>>,
    mut started: EventWriter<InteractionStartedEvent>,
) {
    for ev in interact_events.read() {
        let Ok((mut interactable, mut dialogue)) = npcs.get_mut(ev.entity) else {
            continue;
        };
        if interactable.is_interacting {
            continue;
        }
        if dialogue.lines.is_empty() {
            debug!("[Interaction] NPC {:?} has nothing to say.", ev.entity);
            continue;
        }
        dialogue.begin(&mut interactable);
        started.send(InteractionStartedEvent { entity: ev.entity });
        info!("[Interaction] Dialogue started with {:?} ({} lines).", ev.entity, dialogue.lines.len());
    }
}

/// Emits due lines for every running dialogue and releases the latch when
/// the last spacing elapses.
pub fn advance_dialogue_lines(
    time: Res<Time>,
    mut speakers: Query<(Entity, &mut Interactable, &mut DialogueLines)>,
    mut chat_events: EventWriter<SendChatEvent>,
    mut completed: EventWriter<SequenceCompletedEvent>,
) {
    let dt = time.delta_secs();
    for (entity, mut interactable, mut dialogue) in speakers.iter_mut() {
        let Some(sequence) = dialogue.running.as_mut() else {
            continue;
        };
        let tick = sequence.advance(dt);
        for index in tick.due {
            if let Some(request) = dialogue.request(entity, index) {
                chat_events.send(request);
            }
        }
        if tick.completed {
            dialogue.running = None;
            interactable.is_interacting = false;
            completed.send(SequenceCompletedEvent { entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::proximity::PromptSettings;

    #[test]
    fn test_lines_due_at_multiples_of_spacing() {
        let mut seq = LineSequence::new(3, 3.5);
        assert_eq!(seq.advance(1.0).due, vec![0]);
        assert!(seq.advance(3.0).due.is_empty());
        assert_eq!(seq.advance(0.5).due, vec![1]);
        let tick = seq.advance(3.5);
        assert_eq!(tick.due, vec![2]);
        assert!(!tick.completed);
        assert!(seq.advance(3.5).completed);
    }

    #[test]
    fn test_large_step_releases_several_lines() {
        let mut seq = LineSequence::new(3, 1.0);
        seq.advance(0.0);
        let tick = seq.advance(10.0);
        assert_eq!(tick.due, vec![1, 2]);
        assert!(tick.completed);
    }

    #[test]
    fn test_single_line_completes_after_one_spacing() {
        let mut seq = LineSequence::new(1, 3.5);
        assert_eq!(seq.total_secs(), 3.5);
        assert!(!seq.advance(0.0).completed);
        assert!(!seq.advance(3.4).completed);
        assert!(seq.advance(0.2).completed);
    }

    #[test]
    fn test_begin_latches_and_uses_line_slot() {
        let owner = Entity::from_raw(8);
        let mut dialogue = DialogueLines::new(["Hi.", "Bye."]);
        let mut interactable = Interactable::new(3.0, 5.0, PromptSettings::new("Press F"));
        dialogue.begin(&mut interactable);
        assert!(interactable.is_interacting);
        assert_eq!(dialogue.spacing(), 3.5);
        let request = dialogue.request(owner, 1).unwrap();
        assert_eq!(request.text, "Bye.");
        assert_eq!(request.slot, Some(ChatSlot::line(owner)));
        assert!(dialogue.request(owner, 2).is_none());
    }
}
