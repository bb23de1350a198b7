//! Embedded fallback prompts
//!
//! These are compiled into the binary and used when template files are not found.

/// System message for the remote completion
pub const LESSON_PLAN_SYSTEM: &str = "You are an experienced education specialist who creates detailed, \
engaging lesson plans following best educational practices.";

/// Sections the model is asked to produce, with a hint for each
pub const TARGET_SECTIONS: &[(&str, &str)] = &[
    ("Title", "creative and engaging"),
    ("Overview", "brief summary of the lesson"),
    ("Learning Objectives", "bullet points"),
    ("Materials Needed", "bullet points"),
    ("Procedure", "with introduction, main activity, and conclusion"),
    ("Assessment Methods", ""),
    ("Extensions/Homework", ""),
    ("Teacher Notes", ""),
];

/// User prompt for the remote completion
pub const LESSON_PLAN: &str = r#"
Generate a detailed lesson plan for a {{subject}} class for {{grade_level}} grade students.
The lesson should be designed for {{duration}}.

Learning objectives: {{learning_objectives}}

Additional instructions: {{#if additional_instructions}}{{additional_instructions}}{{else}}None{{/if}}

Please format the response as a structured lesson plan with the following sections:
{{#each sections}}
- {{name}}{{#if hint}} ({{hint}}){{/if}}
{{/each}}

Start each section on its own line with the section name followed by a colon.
"#;

pub const TEMPLATE_TITLE: &str = "Exploring {{subject}}";

pub const TEMPLATE_OVERVIEW: &str = "This {{subject}} lesson for {{grade_label}} students runs {{duration}}. \
It combines a short direct introduction with hands-on practice so that students can {{learning_objectives}}.";

pub const TEMPLATE_OBJECTIVES: &str = r#"{{#each objective_items}}
- {{this}}
{{/each}}
- Explain the key ideas of {{subject}} in their own words
- Apply {{subject}} skills to an unfamiliar problem
"#;

pub const TEMPLATE_MATERIALS: &str = r#"- Whiteboard and markers
- Printed {{subject}} practice worksheets
- Student notebooks
- Exit ticket slips
"#;

pub const TEMPLATE_INTRODUCTION: &str = "Open with a question that connects {{subject}} to students' everyday \
experience. Share today's objectives and spend a few minutes activating prior knowledge through a quick \
think-pair-share.";

pub const TEMPLATE_MAIN_ACTIVITY: &str = "Model one worked example of {{subject}} aloud, then move students into small \
groups to practice. Circulate, ask probing questions, and pull the class back together halfway through the \
lesson to address common misconceptions before independent practice.";

pub const TEMPLATE_CONCLUSION: &str = "Ask two or three groups to share their reasoning. Summarize how today's work \
helps students {{learning_objectives}}, and preview the next lesson.";

pub const TEMPLATE_ASSESSMENT: &str = "Use informal observation during group work and a short exit ticket aligned to \
the objective: {{learning_objectives}}. Review exit tickets to plan follow-up support.";

pub const TEMPLATE_EXTENSIONS: &str = r#"- Complete a short {{subject}} practice set at home
- Find a real-world example of {{subject}} and describe it in a paragraph
- Challenge problem for students who finish early
"#;

pub const TEMPLATE_NOTES: &str = "Pacing assumes {{duration}} of class time. Group students with mixed \
strengths. {{#if additional_instructions}}Additional instructions: {{additional_instructions}}{{else}}No additional \
instructions were provided.{{/if}}";

/// Look up an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "lesson-plan" => Some(LESSON_PLAN),
        "template-title" => Some(TEMPLATE_TITLE),
        "template-overview" => Some(TEMPLATE_OVERVIEW),
        "template-objectives" => Some(TEMPLATE_OBJECTIVES),
        "template-materials" => Some(TEMPLATE_MATERIALS),
        "template-introduction" => Some(TEMPLATE_INTRODUCTION),
        "template-main-activity" => Some(TEMPLATE_MAIN_ACTIVITY),
        "template-conclusion" => Some(TEMPLATE_CONCLUSION),
        "template-assessment" => Some(TEMPLATE_ASSESSMENT),
        "template-extensions" => Some(TEMPLATE_EXTENSIONS),
        "template-notes" => Some(TEMPLATE_NOTES),
        _ => None,
    }
}
