//! HTML page around a rendered map
//!
//! The page is a handlebars template. Values are escaped by handlebars; the
//! map script is inserted raw because every literal in it is already
//! JSON-encoded by [`to_js`](crate::rendering::context::to_js).

use crate::{
    core::{
        constants::{DEFAULT_CSS, DEFAULT_JS},
        map::Map,
    },
    rendering::context::RenderContext,
    Result,
};
use handlebars::Handlebars;
use serde::Serialize;

const PAGE_HTML: &str = include_str!("templates/page.html");

#[derive(Debug, Clone, Serialize)]
struct Asset {
    name: &'static str,
    url: &'static str,
}

#[derive(Debug, Serialize)]
struct PageData<'a> {
    title: &'a str,
    js: Vec<Asset>,
    css: Vec<Asset>,
    map_id: String,
    width: &'a str,
    height: &'a str,
    script: String,
}

/// Renders maps into standalone Leaflet pages
pub struct HtmlDocument {
    renderer: Handlebars<'static>,
}

impl HtmlDocument {
    pub fn new() -> Result<Self> {
        let mut renderer = Handlebars::new();
        renderer.set_prevent_indent(true);
        renderer.register_template_string("page", PAGE_HTML)?;
        Ok(Self { renderer })
    }

    /// Full page for `map`; identical maps give identical output
    pub fn render(&self, map: &Map) -> Result<String> {
        let mut context = RenderContext::new();
        let map_id = map.render(&mut context)?;
        let options = map.options();

        let data = PageData {
            title: &options.title,
            js: DEFAULT_JS
                .iter()
                .map(|&(name, url)| Asset { name, url })
                .collect(),
            css: DEFAULT_CSS
                .iter()
                .map(|&(name, url)| Asset { name, url })
                .collect(),
            map_id,
            width: &options.width,
            height: &options.height,
            script: context.into_script(),
        };

        Ok(self.renderer.render("page", &data)?)
    }
}
