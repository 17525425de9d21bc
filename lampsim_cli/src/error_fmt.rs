//! Human-readable error descriptions and structured JSON error formatting.

use std::error::Error as _;

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    use lampsim_core::{BuildError, LampError};

    // Typed matches first
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::MissingPower => {
                "What happened: No power source was wired into the lamp.\nLikely causes: The source entry failed to build or was not passed via with_power(...).\nHow to fix: Check the [[source]] entries in the config and the lamp's `source` field.".to_string()
            }
            BuildError::MissingProfile => {
                "What happened: No lamp profile was provided.\nLikely causes: The lamp entry names no catalog profile and gives no inline ratings.\nHow to fix: Set `profile = \"...\"` (with --catalog) or amps_needed/max_voltage/lumens inline.".to_string()
            }
            BuildError::MissingName => {
                "What happened: The lamp has no name.\nLikely causes: An empty `name` in the lamp entry.\nHow to fix: Give every [[lamp]] a unique name.".to_string()
            }
            BuildError::InvalidProfile(msg) => format!(
                "What happened: Invalid lamp profile ({msg}).\nLikely causes: Out-of-range ratings in the config or catalog.\nHow to fix: Edit the offending entry, then rerun."
            ),
        };
    }

    if let Some(LampError::Source(msg)) = err.downcast_ref::<LampError>() {
        return format!(
            "What happened: The power source failed ({msg}).\nLikely causes: A poisoned shared circuit or a faulty source adapter.\nHow to fix: Re-run with --log-level=debug or set RUST_LOG for more detail."
        );
    }

    // String-based heuristics for errors coming from init or config
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("lamp catalog csv must have headers") {
        return "Invalid headers in lamp catalog CSV. Expected 'name,amps_needed,max_voltage,lumens'.".to_string();
    }

    if lower.contains("invalid configuration") || lower.contains("unknown source") {
        return "What happened: Configuration is invalid or incomplete.\nLikely causes: A lamp references a missing [[source]], or values are out of range.\nHow to fix: Edit the TOML config and try again.".to_string();
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes: build errors 2, source errors 3, everything else 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    use lampsim_core::{BuildError, LampError};
    if err.downcast_ref::<BuildError>().is_some() {
        return 2;
    }
    if err.downcast_ref::<LampError>().is_some() {
        return 3;
    }
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use lampsim_core::{BuildError, LampError};
    use serde_json::json;

    let reason = if let Some(be) = err.downcast_ref::<BuildError>() {
        match be {
            BuildError::MissingPower => "MissingPower",
            BuildError::MissingProfile => "MissingProfile",
            BuildError::MissingName => "MissingName",
            BuildError::InvalidProfile(_) => "InvalidProfile",
        }
    } else if err.downcast_ref::<LampError>().is_some() {
        "SourceError"
    } else {
        "Error"
    };
    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
