use std::sync::OnceLock;

use regex::Regex;

/// Matches `{{ env.NAME }}` and `{{ env.NAME | default("value") }}`
fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .unwrap_or_else(|e| panic!("invalid placeholder pattern: {e}"))
    })
}

/// Expand environment variable placeholders in raw config text
///
/// Comment lines are left untouched. Placeholders under a scope other than
/// `env.` pass through unexpanded.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            output.push_str(&expand_line(line)?);
        }
        output.push('\n');
    }

    if !input.ends_with('\n') {
        output.pop();
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, String> {
    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for captures in placeholder().captures_iter(line) {
        let matched = captures
            .get(0)
            .ok_or_else(|| "placeholder match missing".to_string())?;
        expanded.push_str(&line[cursor..matched.start()]);

        let name = &captures[1];
        let value = match std::env::var(name) {
            Ok(value) => value,
            Err(_) => match captures.get(2) {
                Some(fallback) => fallback.as_str().to_string(),
                None => return Err(format!("environment variable not found: `{name}`")),
            },
        };
        expanded.push_str(&value);

        cursor = matched.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}
