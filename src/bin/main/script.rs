//! Scripted input for the host bring-up run.

/// One scripted user action, applied at the start of a step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptStep {
    Confirm,
    Increment,
    Decrement,
    StickUp,
    StickDown,
    Idle,
}

impl ScriptStep {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "c" | "confirm" => Some(Self::Confirm),
            "i" | "inc" | "+" => Some(Self::Increment),
            "d" | "dec" | "-" => Some(Self::Decrement),
            "u" | "up" => Some(Self::StickUp),
            "n" | "down" => Some(Self::StickDown),
            "." | "idle" => Some(Self::Idle),
            _ => None,
        }
    }
}

/// Affine `y = x` zoomed in twice, then the quadratic `x^2 - 4` and its summary.
pub const DEMO_SCRIPT: &str = "c i i c c u u c n c i i c c d d d d d d d d c c c";

/// Parses whitespace-separated tokens, reporting the first one that is not understood.
pub fn parse_script<'a, I>(tokens: I) -> Result<Vec<ScriptStep>, String>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(|token| ScriptStep::parse(token).ok_or_else(|| format!("unknown step `{token}`")))
        .collect()
}
