use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::layout::Chart;
use crate::layout::Element;
use crate::layout::ElementKind;
use crate::layout::NavBar;
use crate::layout::Section;
use crate::layout::View;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

#[derive(Serialize)]
struct HeadContext<'a> {
    title: &'a str,
    chart_js_url: &'a str,
    stylesheet: &'a str,
    runtime: &'a str,
}

impl Render for ElementKind {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        match self {
            ElementKind::Section(s) => s.render(output),
            ElementKind::Chart(c) => c.render(output),
        }
    }
}

impl Render for View {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let mut template = TinyTemplate::new();
        template.add_template("head", include_str!("./assets/head.html.tt"))?;

        let context = HeadContext {
            title: &self.title,
            chart_js_url: CHART_JS_URL,
            stylesheet: include_str!("./assets/style.css"),
            runtime: include_str!("./assets/runtime.js"),
        };
        output.write(&template.render("head", &context)?)?;

        output.write("<body>")?;
        output.write(&format!("<header><h1>{}</h1></header>", escape(&self.title)))?;
        self.nav.render(output)?;

        output.write("<main>")?;
        for element in &self.elements {
            element.render(output)?;
        }
        output.write("</main>")?;

        if let Some(timestamp) = self.generated_at {
            output.write(&format!(
                "<footer>Generated on {}</footer>",
                timestamp.format("%Y-%m-%d %H:%M UTC")
            ))?;
        }

        if let Some(request) = self.initial_scroll() {
            let target = script_json(&request.target)?;
            output.write(&format!(
                r#"<script>document.addEventListener("DOMContentLoaded", () => shelfstats.scrollTo({target}));</script>"#
            ))?;
        }

        output.write("</body>")?;
        output.write("</html>")
    }
}

impl Render for NavBar {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write("<nav><ul>")?;

        for link in self.links() {
            let class = if link.active { r#" class="active""# } else { "" };
            output.write(&format!(
                r#"<li><a href="{href}"{class}>{text}</a></li>"#,
                href = escape(&link.href),
                text = escape(&link.text),
            ))?;
        }

        output.write("</ul></nav>")
    }
}

impl Render for Section {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = escape(self.id());
        output.write(&format!(r#"<section id="{id}">"#))?;
        output.write(&format!("<h2>{}</h2>", escape(&self.heading)))?;

        if let Some(ref description) = self.description {
            output.write(&format!("<p>{}</p>", escape(description)))?;
        }

        output.write(r#"<div class="charts">"#)?;
        for element in &self.elements {
            element.render(output)?;
        }
        output.write("</div>")?;

        output.write("</section>")
    }
}

impl Render for Chart {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.canvas_id();
        let config = script_json(self.config())?;

        output.write(&format!(
            r#"
                <div class="chart-container">
                    <canvas id="{id}"></canvas>
                </div>
                <script>shelfstats.mount("{id}", {config});</script>
            "#,
        ))
    }
}

// JSON that is safe to inline in a <script> element: no `<` reaches the HTML parser.
fn script_json<T>(value: &T) -> Result<String, RenderError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}
