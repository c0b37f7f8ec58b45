//! Implementation of the `promptsmith classify` command

use tracing::debug;

use promptsmith_core::{classify, guidance};

use crate::output::{ClassifyData, JsonResponse, to_json};

/// Classify a goal and print its archetype with guidance
pub fn run_classify(goal: &str, json_output: bool, quiet: bool) -> Result<i32, String> {
    let archetype = classify(goal);
    let tips = guidance(archetype);
    debug!(%archetype, tips = tips.len(), "classify command");

    if json_output {
        let response = JsonResponse::ok(
            "classify",
            ClassifyData {
                goal: goal.to_string(),
                archetype,
                tips: tips.iter().map(|t| t.to_string()).collect(),
            },
        );
        println!("{}", to_json(&response).map_err(|e| e.to_string())?);
        return Ok(0);
    }

    println!("{}", archetype);
    if !quiet {
        for tip in tips {
            println!("- {}", tip);
        }
    }
    Ok(0)
}
