//! Per-anchor signal extraction
//!
//! All textual normalization happens here, once per anchor: values are
//! trimmed and absent attributes read as the empty string. The classifier
//! only ever compares the normalized values.

use scraper::{ElementRef, Selector};

/// Normalized accessibility signals of a single anchor element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorSignals {
    /// `title` attribute is present (even if blank)
    pub has_title: bool,

    /// `href` attribute is present (even if blank)
    pub has_href: bool,

    /// `aria-hidden` attribute is present, whatever its value
    pub has_aria_hidden: bool,

    /// Trimmed text content of the anchor and its descendants
    pub anchor_text: String,

    /// Trimmed `aria-label`, empty if absent
    pub aria_label: String,

    /// Trimmed `title`, empty if absent
    pub title_value: String,

    /// Trimmed `href`, empty if absent
    pub href_value: String,

    /// Some descendant image carries a non-blank `alt`
    pub has_descriptive_image_alt: bool,
}

impl AnchorSignals {
    /// Derives the signals of a parsed anchor element
    ///
    /// `images` selects the descendant image elements whose `alt` text is
    /// inspected.
    pub fn from_element(element: &ElementRef<'_>, images: &Selector) -> Self {
        let value = element.value();

        let anchor_text = element.text().collect::<String>().trim().to_string();

        let has_descriptive_image_alt = element
            .select(images)
            .any(|img| img.value().attr("alt").is_some_and(|alt| !alt.trim().is_empty()));

        Self {
            has_title: value.attr("title").is_some(),
            has_href: value.attr("href").is_some(),
            has_aria_hidden: value.attr("aria-hidden").is_some(),
            anchor_text,
            aria_label: trimmed_attr(element, "aria-label"),
            title_value: trimmed_attr(element, "title"),
            href_value: trimmed_attr(element, "href"),
            has_descriptive_image_alt,
        }
    }
}

fn trimmed_attr(element: &ElementRef<'_>, name: &str) -> String {
    element
        .value()
        .attr(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn signals_of(fragment: &str) -> AnchorSignals {
        let document = Html::parse_fragment(fragment);
        let anchors = Selector::parse("a").unwrap();
        let images = Selector::parse("img").unwrap();
        let element = document.select(&anchors).next().unwrap();
        AnchorSignals::from_element(&element, &images)
    }

    #[test]
    fn test_bare_anchor() {
        let signals = signals_of("<a>Read more</a>");
        assert_eq!(
            signals,
            AnchorSignals {
                anchor_text: "Read more".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_attributes_are_trimmed() {
        let signals = signals_of(
            r#"<a href="  /docs " title=" Docs  " aria-label="  ">  Docs  </a>"#,
        );
        assert!(signals.has_href);
        assert!(signals.has_title);
        assert_eq!(signals.href_value, "/docs");
        assert_eq!(signals.title_value, "Docs");
        assert_eq!(signals.anchor_text, "Docs");
        assert_eq!(signals.aria_label, "");
    }

    #[test]
    fn test_blank_attributes_still_count_as_present() {
        let signals = signals_of(r#"<a href="" title="">x</a>"#);
        assert!(signals.has_href);
        assert!(signals.has_title);
        assert_eq!(signals.href_value, "");
        assert_eq!(signals.title_value, "");
    }

    #[test]
    fn test_aria_hidden_presence_only() {
        let signals = signals_of(r#"<a aria-hidden="false"></a>"#);
        assert!(signals.has_aria_hidden);
    }

    #[test]
    fn test_nested_text_is_collected() {
        let signals = signals_of("<a href='/'><span>Top</span> <b>stories</b></a>");
        assert_eq!(signals.anchor_text, "Top stories");
    }

    #[test]
    fn test_image_alt_detection() {
        assert!(signals_of(r#"<a href="/"><img src="l.png" alt=" Logo "></a>"#)
            .has_descriptive_image_alt);
        assert!(!signals_of(r#"<a href="/"><img src="l.png" alt="   "></a>"#)
            .has_descriptive_image_alt);
        assert!(!signals_of(r#"<a href="/"><img src="l.png"></a>"#).has_descriptive_image_alt);
        assert!(signals_of(
            r#"<a href="/"><img src="a.png" alt=""><span><img src="b.png" alt="Home"></span></a>"#
        )
        .has_descriptive_image_alt);
    }
}
