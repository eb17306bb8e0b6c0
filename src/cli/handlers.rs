// src/cli/handlers.rs
use serde_json::{json, Value};

use crate::analysis::evaluate;
use crate::cli::display::{render_strength, render_topic};
use crate::crypto::RandomSourceKind;
use crate::education::EducationManager;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::StrengthResult;

fn strength_json(result: &StrengthResult) -> Value {
    json!({
        "result": result,
        "label": result.level().label(),
        "percent": result.percent(),
        "unmet": result.unmet_rules().iter().map(|r| r.description()).collect::<Vec<_>>(),
    })
}

// Handlers for one-shot CLI commands
pub fn handle_check(password: &str, as_json: bool) -> String {
    let result = evaluate(password);
    log::info!("Checked {}-character password: score {}", password.chars().count(), result.score());

    if as_json {
        let mut body = strength_json(&result);
        body["success"] = json!(true);
        body.to_string()
    } else {
        render_strength(&result)
    }
}

pub fn handle_generate(count: u32, kind: RandomSourceKind, as_json: bool) -> Result<String, GeneratorError> {
    let mut generator = PasswordGenerator::with_kind(kind);
    let mut passwords = Vec::with_capacity(count as usize);

    for _ in 0..count {
        passwords.push(generator.generate_password()?);
    }
    log::info!("Generated {} password(s) from {} source", passwords.len(), kind);

    if as_json {
        let entries: Vec<Value> = passwords
            .iter()
            .map(|password| {
                let mut entry = strength_json(&evaluate(password));
                entry["password"] = json!(password);
                entry
            })
            .collect();
        Ok(json!({ "success": true, "passwords": entries }).to_string())
    } else {
        let mut out = String::new();
        for password in &passwords {
            let result = evaluate(password);
            out.push_str(&format!("{}  ({})\n", password, result.level().label()));
        }
        Ok(out)
    }
}

pub fn handle_tips(as_json: bool) -> String {
    let manager = EducationManager::new();
    let topics = manager.get_all_topics();

    if as_json {
        json!({ "success": true, "topics": topics }).to_string()
    } else {
        topics.iter().map(render_topic).collect::<Vec<_>>().join("\n")
    }
}

pub fn error_json(message: &str) -> String {
    json!({ "success": false, "error": message }).to_string()
}
