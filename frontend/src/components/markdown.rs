use pulldown_cmark::{Event, Options, Parser, html};
use yew::prelude::*;

/// Converts model output to HTML. Raw HTML in the source is escaped as text.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

pub fn render_markdown(source: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(markdown_to_html(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_and_bullets_become_markup() {
        let rendered = markdown_to_html("**Rice** suits this soil.\n\n* Maize\n* Jute\n");
        assert!(rendered.contains("<strong>Rice</strong>"));
        assert!(rendered.contains("<li>Maize</li>"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let rendered = markdown_to_html("Try <img src=x onerror=alert(1)> now");
        assert!(!rendered.contains("<img"));
        assert!(rendered.contains("&lt;img"));
    }
}
