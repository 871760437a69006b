//! Page shell: document scaffolding shared by every single-page app.
//!
//! The shell only carries metadata (title, user capability flags,
//! maintenance-mode banner data) and two mount points; the page's own
//! script renders everything inside them.

use gantry_common::MaintenanceModeInfo;

use crate::application::ports::AssetResolver;

const PRODUCT_NAME: &str = "Gantry";

/// The signed-in user as the page sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUser {
    pub display_name: String,
    pub is_admin: bool,
}

/// Everything one page render needs.
#[derive(Debug, Clone)]
pub struct PageShell<'a> {
    pub title: &'a str,
    /// Names the page's bundle: `single_page_apps/<name>.{css,js}`.
    pub controller_name: &'a str,
    pub user: Option<PageUser>,
    pub maintenance: MaintenanceModeInfo,
    pub show_header: bool,
    /// Trusted markup mounted verbatim into the content region.
    pub content: &'a str,
}

impl PageShell<'_> {
    /// Render the full HTML document.
    pub fn render(&self, assets: &dyn AssetResolver) -> String {
        let page_css = format!("single_page_apps/{}.css", self.controller_name);
        let page_js = format!("single_page_apps/{}.js", self.controller_name);

        let mut html = String::with_capacity(1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", escape_html(&self.document_title())));
        for css in ["frameworks.css", page_css.as_str()] {
            html.push_str(&format!(
                "  <link rel=\"stylesheet\" href=\"{}\">\n",
                escape_html(&assets.asset_path(css))
            ));
        }
        html.push_str(&format!(
            "  <script src=\"{}\"></script>\n",
            escape_html(&assets.asset_path("frameworks.js"))
        ));
        html.push_str(&format!(
            "  <script src=\"{}\" defer></script>\n",
            escape_html(&assets.asset_path(&page_js))
        ));
        html.push_str("</head>\n");

        html.push_str(&format!("<body{}>\n", self.body_attributes()));
        html.push_str("  <div class=\"page-wrap\">\n");
        if self.show_header {
            html.push_str(&format!(
                "    <div id=\"app-menu\" data-nav-admin=\"{}\"></div>\n",
                self.is_admin()
            ));
        }
        html.push_str("    <div id=\"app-content\">");
        html.push_str(self.content);
        html.push_str("</div>\n  </div>\n</body>\n</html>\n");
        html
    }

    fn document_title(&self) -> String {
        if self.title.trim().is_empty() {
            PRODUCT_NAME.to_string()
        } else {
            format!("{} - {PRODUCT_NAME}", self.title.trim())
        }
    }

    fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    fn body_attributes(&self) -> String {
        let mut attrs: Vec<(&str, String)> = vec![
            ("data-controller-name", self.controller_name.to_string()),
            ("data-is-user-admin", self.is_admin().to_string()),
        ];
        if let Some(user) = &self.user {
            attrs.push(("data-user-display-name", user.display_name.clone()));
        }
        attrs.push((
            "data-is-server-in-maintenance-mode",
            self.maintenance.is_maintenance_mode().to_string(),
        ));
        if self.maintenance.is_maintenance_mode() {
            if let Some(updated_on) = self.maintenance.updated_on() {
                attrs.push(("data-maintenance-mode-updated-on", updated_on.to_rfc3339()));
            }
            if let Some(updated_by) = self.maintenance.updated_by() {
                attrs.push(("data-maintenance-mode-updated-by", updated_by.to_string()));
            }
        }

        attrs
            .iter()
            .map(|(name, value)| format!(" {name}=\"{}\"", escape_html(value)))
            .collect()
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
