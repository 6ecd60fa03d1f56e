//! HTML views.
//!
//! Both pages are pure functions of their input: the form depends only on the
//! schema, the result page only on the outcome.

use miyuki_core::{OptionKind, OptionSchema, OptionSpec, Outcome};

const PAGE_TITLE: &str = "Miyuki Downloader";
const LIST_PLACEHOLDER: &str = "Separate with spaces";

/// Render the option form: one table row and one input per schema entry.
pub fn render_form(schema: &OptionSchema) -> String {
    let rows: String = schema.iter().map(render_row).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{PAGE_TITLE}</title>
</head>
<body>
    <h1>{PAGE_TITLE}</h1>
    <form method="post" action="/submit">
        <table border="1">
            <tr>
                <th>Option</th>
                <th>Value</th>
                <th>Description</th>
            </tr>
{rows}        </table>
        <br>
        <button type="submit">Submit</button>
    </form>
</body>
</html>
"#
    )
}

/// Render the outcome report with a link back to the form.
pub fn render_result(outcome: &Outcome) -> String {
    let message = escape_html(&outcome.message());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{PAGE_TITLE} - Result</title>
</head>
<body>
    <h1>{PAGE_TITLE} - Result</h1>
    <pre>{message}</pre>
    <br>
    <a href="/">Back to Home</a>
</body>
</html>
"#
    )
}

fn render_row(spec: &OptionSpec) -> String {
    let name = escape_html(spec.name);
    let description = escape_html(spec.description);
    let control = render_control(spec.kind, &name);

    format!(
        "            <tr>
                <td>-{name}</td>
                <td>{control}</td>
                <td>{description}</td>
            </tr>
"
    )
}

/// Input control for a kind; lists share the plain text input.
fn render_control(kind: OptionKind, name: &str) -> String {
    match kind {
        OptionKind::Flag => format!(r#"<input type="checkbox" name="{name}">"#),
        OptionKind::TextList => {
            format!(r#"<input type="text" name="{name}" placeholder="{LIST_PLACEHOLDER}">"#)
        }
        OptionKind::Text => format!(r#"<input type="text" name="{name}">"#),
    }
}

/// HTML-escape a string
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
