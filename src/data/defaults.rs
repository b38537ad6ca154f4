//! Built-in quest catalog and story script for the first district.

use crate::shared::*;

pub fn quest_catalog() -> Vec<QuestDef> {
    vec![
        QuestDef {
            id: "Q1".to_string(),
            description: "Find and support A Long".to_string(),
            target: (18.0, 6.0),
        },
        QuestDef {
            id: "Q2.1".to_string(),
            description: "Search the west side for clues".to_string(),
            target: (-20.0, 2.0),
        },
    ]
}

pub fn story_script() -> StoryScript {
    StoryScript {
        opening: vec![
            StoryStep::Wait(1.0),
            StoryStep::Notice(
                "Black City, where light never reaches the bottom of the dark.".to_string(),
            ),
            StoryStep::Wait(2.0),
            StoryStep::Say("A Long is surrounded. I need to find him and help.".to_string()),
            StoryStep::Wait(5.0),
            StoryStep::StartQuest("Q1".to_string()),
        ],
        hooks: vec![StoryHook {
            quest_id: "Q1".to_string(),
            steps: vec![
                StoryStep::Say("Skill takes time to sharpen, and time is short...".to_string()),
                StoryStep::Wait(5.0),
                StoryStep::LoadScene("Scene 2".to_string()),
            ],
        }],
    }
}
