//! Headless driver: feed a key script to the engine and emit one JSON line
//! per step.

use serde::Serialize;
use std::io::{self, Write};

use crate::ussd::{SessionSnapshot, TransitionResult, UssdEngine};

/// One step of a key script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Submit this key to the current screen.
    Key(String),
    /// Dedicated back button.
    Back,
    /// Home button.
    Home,
}

/// Split a script on commas and whitespace. `back` and `home` (any case)
/// are control buttons; every other token is submitted as a key.
pub fn parse_script(script: &str) -> Vec<ScriptStep> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.to_ascii_lowercase().as_str() {
            "back" => ScriptStep::Back,
            "home" => ScriptStep::Home,
            _ => ScriptStep::Key(token.to_string()),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub input: String,
    /// `None` for the back and home buttons, which report no outcome.
    pub result: Option<TransitionResult>,
    pub snapshot: SessionSnapshot,
}

/// Apply a single step to the engine.
pub fn apply_step(engine: &mut UssdEngine, step: &ScriptStep) -> StepReport {
    let (input, result) = match step {
        ScriptStep::Key(key) => (key.clone(), Some(engine.submit(key))),
        ScriptStep::Back => {
            engine.go_back_one_step();
            ("back".to_string(), None)
        }
        ScriptStep::Home => {
            engine.reset();
            ("home".to_string(), None)
        }
    };
    StepReport {
        input,
        result,
        snapshot: engine.snapshot(),
    }
}

/// Run `script` and write one JSON report per step to `out`.
pub fn run_script<W: Write>(engine: &mut UssdEngine, script: &str, out: &mut W) -> io::Result<()> {
    for step in parse_script(script) {
        let report = apply_step(engine, &step);
        serde_json::to_writer(&mut *out, &report)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_commas_and_spaces() {
        assert_eq!(
            parse_script("3, 1 0,,BACK home"),
            vec![
                ScriptStep::Key("3".to_string()),
                ScriptStep::Key("1".to_string()),
                ScriptStep::Key("0".to_string()),
                ScriptStep::Back,
                ScriptStep::Home,
            ]
        );
    }

    #[test]
    fn parse_empty_script() {
        assert!(parse_script("  ,  ").is_empty());
    }
}
