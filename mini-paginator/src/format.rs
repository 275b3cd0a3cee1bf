//! Page footer stamping.

use twilight_model::channel::message::embed::{Embed, EmbedFooter};

/// Default page marker template.
pub const DEFAULT_PAGE_TEMPLATE: &str = "({page}/{total})";
/// Default separator placed between an existing footer and the page marker.
pub const DEFAULT_SEPARATOR: &str = " • ";

/// How page markers are rendered into embed footers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFormat {
    /// Marker template; `{page}` is 1-based, `{total}` is the page count.
    pub template: String,
    pub separator: String,
}

impl Default for PageFormat {
    fn default() -> Self {
        Self {
            template: DEFAULT_PAGE_TEMPLATE.to_owned(),
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl PageFormat {
    /// Render the marker for 1-based `page` out of `total`.
    pub fn marker(&self, page: usize, total: usize) -> String {
        self.template
            .replace("{page}", &page.to_string())
            .replace("{total}", &total.to_string())
    }

    /// Footer text for a page whose current footer text is `existing`.
    pub fn footer_text(&self, existing: Option<&str>, page: usize, total: usize) -> String {
        let marker = self.marker(page, total);
        match existing {
            Some(text) if !text.is_empty() => format!("{text}{}{marker}", self.separator),
            _ => marker,
        }
    }
}

/// Return copies of `pages` with a page marker appended to every footer.
///
/// Footer icons are carried over; nothing else on the embed changes. The input
/// is left untouched, so stamping the result again would add a second marker.
pub fn format_pages(pages: &[Embed], format: &PageFormat) -> Vec<Embed> {
    let total = pages.len();

    pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let mut page = page.clone();
            let previous = page.footer.take();
            let text = format.footer_text(
                previous.as_ref().map(|footer| footer.text.as_str()),
                index + 1,
                total,
            );

            page.footer = Some(match previous {
                Some(footer) => EmbedFooter { text, ..footer },
                None => EmbedFooter {
                    icon_url: None,
                    proxy_icon_url: None,
                    text,
                },
            });
            page
        })
        .collect()
}
