use crate::{
    rendering::context::{to_js, RenderContext},
    Result,
};

/// Default popup width, relative to the popup container
const DEFAULT_MAX_WIDTH: &str = "100%";

/// Content bound to a layer and shown when the layer is clicked
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub content: String,
    /// Insert `content` as markup instead of escaping it
    pub raw_html: bool,
    pub max_width: String,
    /// Open the popup as soon as the page loads
    pub visible: bool,
}

impl Popup {
    /// Popup showing `text` verbatim; markup characters are escaped
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            raw_html: false,
            max_width: DEFAULT_MAX_WIDTH.to_string(),
            visible: false,
        }
    }

    /// Popup whose content is inserted into the page as markup
    pub fn html(markup: impl Into<String>) -> Self {
        Self {
            raw_html: true,
            ..Self::new(markup)
        }
    }

    pub fn with_max_width(mut self, max_width: impl Into<String>) -> Self {
        self.max_width = max_width.into();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Markup placed inside the popup
    pub fn content_html(&self) -> String {
        let body = if self.raw_html {
            self.content.clone()
        } else {
            handlebars::html_escape(&self.content)
        };
        format!("<div style=\"width: 100.0%; height: 100.0%;\">{}</div>", body)
    }

    /// Emits the popup and binds it to the layer held in `parent_var`
    pub fn render_on(&self, context: &mut RenderContext, parent_var: &str) -> Result<()> {
        let name = context.next_name("popup");
        let options = serde_json::json!({ "maxWidth": self.max_width });

        context.push_line(format!("var {} = L.popup({});", name, to_js(&options)?));
        context.push_line(format!(
            "{}.setContent({});",
            name,
            to_js(&self.content_html())?
        ));
        context.push_line(format!("{}.bindPopup({});", parent_var, name));
        if self.visible {
            context.push_line(format!("{}.openPopup();", parent_var));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let popup = Popup::new("Fish & <Chips>");
        assert_eq!(
            popup.content_html(),
            "<div style=\"width: 100.0%; height: 100.0%;\">Fish &amp; &lt;Chips&gt;</div>"
        );
    }

    #[test]
    fn test_raw_html_is_kept() {
        let popup = Popup::html("<b>Madrid</b>");
        assert!(popup.content_html().contains("<b>Madrid</b>"));
    }

    #[test]
    fn test_max_width_option() {
        let mut context = RenderContext::new();
        Popup::new("Madrid")
            .with_max_width("300px")
            .render_on(&mut context, "marker_0")
            .unwrap();

        let script = context.script();
        assert!(script.contains("var popup_0 = L.popup({\"maxWidth\":\"300px\"});"));
        assert!(!script.contains("openPopup"));
    }

    #[test]
    fn test_render_binds_to_parent() {
        let mut context = RenderContext::new();
        Popup::new("Madrid")
            .with_visible(true)
            .render_on(&mut context, "marker_0")
            .unwrap();

        let script = context.script();
        assert!(script.contains("var popup_0 = L.popup({\"maxWidth\":\"100%\"});"));
        assert!(script.contains("Madrid"));
        assert!(script.contains("marker_0.bindPopup(popup_0);"));
        assert!(script.contains("marker_0.openPopup();"));
    }
}
