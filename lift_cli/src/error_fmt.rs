//! Human-readable error descriptions and structured JSON error formatting.

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    use lift_core::LiftError;

    if let Some(le) = err.downcast_ref::<LiftError>() {
        return match le {
            LiftError::Output(msg) => format!(
                "What happened: Driving the motion outputs failed ({msg}).\nLikely causes: GPIO permissions or wrong pin numbers.\nHow to fix: Check [pins] in the config and GPIO access rights."
            ),
            LiftError::Persist(msg) => format!(
                "What happened: Reading or writing the threshold file failed ({msg}).\nLikely causes: Bad path or read-only filesystem.\nHow to fix: Check persist.threshold_path in the config and its permissions."
            ),
            LiftError::Console(msg) => format!(
                "What happened: Console I/O failed ({msg}).\nLikely causes: Stdin/stdout closed by the parent process.\nHow to fix: Run attached to a terminal or keep the pipes open."
            ),
        };
    }

    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();
    if lower.contains("invalid configuration") || lower.contains("config") {
        return "What happened: Configuration is invalid or unreadable.\nLikely causes: Missing file, malformed TOML, or out-of-range values.\nHow to fix: Edit the TOML config and try again.".to_string();
    }

    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use lift_core::LiftError;
    use serde_json::json;

    let reason = match err.downcast_ref::<LiftError>() {
        Some(LiftError::Output(_)) => "Output",
        Some(LiftError::Persist(_)) => "Persist",
        Some(LiftError::Console(_)) => "Console",
        None => "Error",
    };
    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
