use crate::services::current_datetime;
use crate::views::template_env;
use minijinja::context;

pub fn render_console_page() -> Result<String, String> {
    let context = context! {
        title => "n8n Control Center",
        generated_at => current_datetime(),
    };

    template_env()
        .get_template("console.html")
        .map_err(|err| format!("template error: {err}"))?
        .render(context)
        .map_err(|err| format!("template error: {err}"))
}

pub fn health_html() -> &'static str {
    r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>n8n Console Health</title>
  </head>
  <body>
    <p>Status: ok</p>
    <p><a href="/">Open the console</a></p>
  </body>
</html>
"#
}
