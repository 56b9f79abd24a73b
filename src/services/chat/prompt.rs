use crate::models::chat::{AssistantProfile, AssistantTask};
use crate::models::personas::PersonaPreset;
use crate::validation::{non_blank, sanitize_string};
use indexmap::IndexMap;

/// Sections of the assembled system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptSection {
    Persona,
    AboutUser,
    Commitments,
    Guidance,
}

// Positional Order (0 = Top of prompt, higher = later)
pub const POS_PERSONA: i32 = 0;
pub const POS_ABOUT_USER: i32 = 1;
pub const POS_COMMITMENTS: i32 = 2;
pub const POS_GUIDANCE: i32 = 3;

impl PromptSection {
    fn position(&self) -> i32 {
        match self {
            PromptSection::Persona => POS_PERSONA,
            PromptSection::AboutUser => POS_ABOUT_USER,
            PromptSection::Commitments => POS_COMMITMENTS,
            PromptSection::Guidance => POS_GUIDANCE,
        }
    }
}

/// Collects prompt sections and renders them in their fixed order.
///
/// Each section is keyed, so adding the same section twice replaces it.
/// Rendering separates sections with a blank line.
#[derive(Debug, Clone, Default)]
pub struct PromptAssembler {
    pub sections: IndexMap<PromptSection, String>,
}

impl PromptAssembler {
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
        }
    }

    pub fn add_section(&mut self, section: PromptSection, content: String) {
        self.sections.insert(section, content);
    }

    /// Adds the section only when there is content for it.
    pub fn add_optional(&mut self, section: PromptSection, content: Option<String>) {
        if let Some(content) = content {
            self.add_section(section, content);
        }
    }

    /// Sorts sections into their natural order:
    /// Persona -> About the user -> Commitments -> Guidance
    pub fn sort_by_position(&mut self) {
        self.sections
            .sort_by(|ka, _, kb, _| ka.position().cmp(&kb.position()));
    }

    pub fn render(&self) -> String {
        self.sections
            .values()
            .map(|content| content.trim())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Builds the system prompt sent ahead of the conversation.
///
/// Pure: the same arguments always produce the same string.
pub fn build_system_prompt(
    persona: &PersonaPreset,
    custom_instructions: Option<&str>,
    profile: Option<&AssistantProfile>,
    tasks: &[AssistantTask],
) -> String {
    let mut assembler = PromptAssembler::new();

    assembler.add_section(PromptSection::Persona, format_persona_fragment(persona));
    assembler.add_optional(
        PromptSection::AboutUser,
        profile.and_then(format_profile_fragment),
    );
    assembler.add_optional(PromptSection::Commitments, format_tasks_fragment(tasks));
    assembler.add_optional(
        PromptSection::Guidance,
        custom_instructions.and_then(format_guidance_fragment),
    );

    assembler.sort_by_position();
    assembler.render()
}

pub fn format_persona_fragment(persona: &PersonaPreset) -> String {
    let mut fragment = sanitize_string(persona.instructions);
    fragment.push_str(&format!("\n\nTone: {}.", persona.tone));
    if !persona.strengths.is_empty() {
        fragment.push_str(&format!(" Strengths: {}.", persona.strengths.join(", ")));
    }
    fragment
}

/// Lists only the profile fields that were supplied.
pub fn format_profile_fragment(profile: &AssistantProfile) -> Option<String> {
    let fields = [
        ("Name", profile.name.as_deref()),
        ("Focus", profile.focus.as_deref()),
        ("Mood", profile.mood.as_deref()),
        ("Notes", profile.notes.as_deref()),
    ];

    let lines: Vec<String> = fields
        .into_iter()
        .filter_map(|(label, value)| non_blank(value).map(|value| format!("- {}: {}", label, value)))
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(format!("About the user:\n{}", lines.join("\n")))
}

/// Lists tasks in the order given, each marked done or open.
pub fn format_tasks_fragment(tasks: &[AssistantTask]) -> Option<String> {
    if tasks.is_empty() {
        return None;
    }

    let mut fragment = String::from("Current commitments:");
    for task in tasks {
        let state = if task.done { "done" } else { "open" };
        fragment.push_str(&format!("\n- [{}] {}", state, task.title.trim()));
    }
    Some(fragment)
}

pub fn format_guidance_fragment(instructions: &str) -> Option<String> {
    let instructions = sanitize_string(instructions);
    if instructions.is_empty() {
        return None;
    }
    Some(format!("Additional guidance:\n{}", instructions))
}
