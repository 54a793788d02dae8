//! Embedded cognitive directives.
//!
//! All directive text is baked into the binary at compile time; no external
//! files are required at runtime. These are not runtime prompts: they carry
//! no dynamic variables and depend on no session state.

pub const PROMPT_VERSION: &str = "1.0.0";

/// Macro to embed directive documents at compile time as text.
macro_rules! embedded_prompts {
    ($($path:expr => $const_name:ident),* $(,)?) => {
        $(
            pub const $const_name: &str =
                include_str!(concat!("../../prompts/", $path));
        )*

        pub fn get_prompt(path: &str) -> Option<&'static str> {
            match path {
                $( $path => Some($const_name), )*
                _ => None,
            }
        }

        pub fn list_prompts() -> Vec<&'static str> {
            vec![ $( $path, )* ]
        }
    };
}

embedded_prompts! {
    "constitution.md" => CONSTITUTION,
    "system.md" => SYSTEM_DIRECTIVE,
    "system_rules.md" => SYSTEM_HARD_RULES,
    "roles/planner.md" => PLANNER_DIRECTIVE,
    "roles/analyzer.md" => ANALYZER_DIRECTIVE,
    "roles/validator.md" => VALIDATOR_DIRECTIVE,
    "roles/observer.md" => OBSERVER_DIRECTIVE,
}

/// One-line directives keyed by routing mode.
pub static MODE_DIRECTIVES: [(&str, &str); 5] = [
    ("explain", "Explain concepts clearly, precisely, and without speculation."),
    ("diagnose", "Identify problems, anomalies, and plausible causes."),
    ("summarize", "Extract and present essential information only."),
    ("plan", "Produce a structured, ordered plan or workflow."),
    ("validate", "Check correctness and highlight issues or risks."),
];

/// One-line directives keyed by lifecycle state.
pub static LIFECYCLE_DIRECTIVES: [(&str, &str); 5] = [
    ("boot", "System is initializing. Avoid assumptions."),
    ("idle", "Awaiting user intent. Do not speculate."),
    ("active", "Actively processing a task."),
    ("executing", "A plan is running. Do not replan; report progress."),
    ("closing", "Finalize output and ensure internal consistency."),
];

pub fn mode_directive(mode: &str) -> Option<&'static str> {
    MODE_DIRECTIVES
        .iter()
        .find(|(name, _)| *name == mode)
        .map(|(_, text)| *text)
}

pub fn lifecycle_directive(state: &str) -> Option<&'static str> {
    LIFECYCLE_DIRECTIVES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, text)| *text)
}
