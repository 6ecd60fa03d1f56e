//! Options command handler.
//!
//! Prints the option table the web form is generated from.

use anyhow::Result;
use miyuki_core::OptionSchema;

/// Execute the options command.
pub fn execute() -> Result<()> {
    let schema = OptionSchema::miyuki()?;
    print!("{}", format_table(&schema));
    Ok(())
}

/// Format the schema as aligned `-name  kind  description` rows.
pub fn format_table(schema: &OptionSchema) -> String {
    let name_width = schema
        .iter()
        .map(|spec| spec.name.len() + 1)
        .max()
        .unwrap_or(0)
        .max("OPTION".len());

    let mut out = format!("{:<name_width$}  {:<6}  DESCRIPTION\n", "OPTION", "KIND");
    for spec in schema {
        let flag = format!("-{}", spec.name);
        out.push_str(&format!(
            "{flag:<name_width$}  {:<6}  {}\n",
            spec.kind.as_str(),
            spec.description
        ));
    }
    out
}
