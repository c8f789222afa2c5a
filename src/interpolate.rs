use crate::store::CommandContext;
use regex::Regex;

/// Replace every `${name}` reference in `str` with its value from the
/// variable tables. Names bound in neither table are left verbatim, as is
/// anything the placeholder grammar does not match.
pub fn replace_variables(ctx: &CommandContext, str: &str) -> String {
    let placeholder = Regex::new(r"\$\{[A-Za-z0-9_]+\}").unwrap();

    // Find all of the matching variable references
    let matches: Vec<&str> = placeholder.find_iter(str).map(|m| m.as_str()).collect();
    if matches.is_empty() {
        return str.to_string();
    }

    // For each match, lookup the variable value, and replace if found.
    // Both tables are consulted for every match: a name bound in both
    // consumes one occurrence with the local value, then one more with the
    // global value if any occurrence remains.
    let mut result = str.to_string();
    for variable in matches {
        let name = &variable[2..variable.len() - 1];

        if let Some(value) = ctx.get_local_variable(name) {
            result = result.replacen(variable, &value, 1);
        }
        if let Some(value) = ctx.get_global_variable(name) {
            result = result.replacen(variable, &value, 1);
        }
    }
    result
}
