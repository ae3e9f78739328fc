//! Construction of the directive strings submitted to the engine.
//!
//! Directives are ordinary engine commands; the bridge only ever builds the
//! three bootstrap/compatibility forms below, everything else is forwarded
//! verbatim from the caller.

/// Quote a string as a yacas string literal, escaping quotes and backslashes.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `DefaultDirectory("<path>");` — points the engine at its script directory.
pub fn default_directory(path: &str) -> String {
    format!("DefaultDirectory({});", quote(path))
}

/// `Load("<script>");` — loads a script through the engine's search path.
pub fn load(script: &str) -> String {
    format!("Load({});", quote(script))
}

/// `PrettyPrinter'Set("<printer>");` — selects a non-standard output printer.
pub fn pretty_printer_set(printer: &str) -> String {
    format!("PrettyPrinter'Set({});", quote(printer))
}

/// `PrettyPrinter'Set();` — resets the printer to the standard form.
pub fn pretty_printer_reset() -> String {
    "PrettyPrinter'Set();".to_string()
}
