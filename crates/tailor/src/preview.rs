//! HTML preview page for the element library.

use minijinja::{context, Environment};

use tailor_elements::ElementJson;

/// Renders the library preview page served by `tailor serve`.
pub struct PreviewEngine {
    env: Environment<'static>,
}

impl PreviewEngine {
    /// Create an engine with the embedded template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("library.html".to_string(), LIBRARY_TEMPLATE.to_string())
            .expect("Failed to add library template");

        Self { env }
    }

    /// Render the preview page for a serialized library.
    pub fn render_library(
        &self,
        title: &str,
        elements: &[ElementJson],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("library.html")?;

        tmpl.render(context! {
            title => title,
            elements => elements,
        })
    }
}

impl Default for PreviewEngine {
    fn default() -> Self {
        Self::new()
    }
}

const LIBRARY_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - Element Library</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; }
    .element { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; margin-bottom: 1rem; }
    .element h2 { margin: 0 0 .25rem; font-size: 1.1rem; }
    .tag { color: #666; font-family: monospace; }
    .badge { float: right; background: #eef; border-radius: 3px; padding: .1rem .5rem; font-size: .8rem; }
    .counts { color: #888; font-size: .85rem; }
  </style>
</head>
<body>
  <h1>{{ title }}</h1>
  <p><a href="/library.json">library.json</a></p>
  {% for element in elements %}
  <div class="element">
    {% if element.badge %}<span class="badge">{{ element.badge }}</span>{% endif %}
    <h2>{{ element.label }} <span class="tag">[{{ element.tag }}]</span></h2>
    {% if element.description %}<p>{{ element.description }}</p>{% endif %}
    <p class="counts">
      {{ element.settings | length }} settings,
      {{ element.sections | length }} sections,
      {{ element.controls | length }} controls
    </p>
  </div>
  {% endfor %}
</body>
</html>"##;
