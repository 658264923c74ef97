use crate::escape;
use startpage_core::{Escaping, Section};

/// Separator block placed under each heading and between section pairs.
pub const SEPARATOR: &str = r#"<div class="sep"></div>"#;

/// Render the navigation sections as an HTML fragment.
///
/// Sections and links keep configuration order. An extra separator block
/// follows every section at an odd 1-based position (1st, 3rd, 5th, ...),
/// which lays the sections out in pairs.
pub fn render_sections(sections: &[Section], escaping: Escaping) -> String {
    let mut html = String::new();

    for (index, section) in sections.iter().enumerate() {
        html.push_str(&format!(
            "<section>\n\t<h3>{}</h3>\n\t{}\n\t<ul>\n",
            escape::apply(escaping, &section.name),
            SEPARATOR
        ));

        for link in &section.links {
            html.push_str(&format!(
                "\t\t<li data-icon=\"{}\"><a href=\"{}\">{}</a></li>\n",
                escape::apply(escaping, &link.icon),
                escape::apply(escaping, &link.url),
                escape::apply(escaping, &link.name),
            ));
        }

        html.push_str("\t</ul>\n</section>\n");

        if (index + 1) % 2 == 1 {
            html.push_str(SEPARATOR);
            html.push('\n');
        }
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use startpage_core::Link;

    fn section(name: &str, links: &[(&str, &str, &str)]) -> Section {
        Section {
            name: name.to_string(),
            links: links
                .iter()
                .map(|(name, icon, url)| Link {
                    name: name.to_string(),
                    icon: icon.to_string(),
                    url: url.to_string(),
                })
                .collect(),
        }
    }

    fn sample() -> Vec<Section> {
        vec![
            section("A", &[("x", "i1", "u1")]),
            section("B", &[("y", "i2", "u2")]),
            section("C", &[]),
        ]
    }

    #[test]
    fn test_render_single_section_markup() {
        let html = render_sections(&[section("A", &[("x", "i1", "u1")])], Escaping::Html);
        assert_eq!(
            html,
            "<section>\n\t<h3>A</h3>\n\t<div class=\"sep\"></div>\n\t<ul>\n\
             \t\t<li data-icon=\"i1\"><a href=\"u1\">x</a></li>\n\
             \t</ul>\n</section>\n\
             <div class=\"sep\"></div>\n"
        );
    }

    #[test]
    fn test_sections_in_input_order() {
        let html = render_sections(&sample(), Escaping::Html);
        assert_eq!(html.matches("<section>").count(), 3);

        let a = html.find("<h3>A</h3>").unwrap();
        let b = html.find("<h3>B</h3>").unwrap();
        let c = html.find("<h3>C</h3>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_separator_after_odd_positions_only() {
        let html = render_sections(&sample(), Escaping::Html);
        let blocks: Vec<&str> = html.split("</section>\n").collect();

        // A (1st) and C (3rd) are followed by an extra separator, B (2nd) is not
        assert!(blocks[1].starts_with("<div class=\"sep\"></div>\n<section>"));
        assert!(blocks[2].starts_with("<section>"));
        assert_eq!(blocks[3], "<div class=\"sep\"></div>\n");

        // 3 heading separators + 2 pair separators
        assert_eq!(html.matches(SEPARATOR).count(), 5);
    }

    #[test]
    fn test_empty_section_has_empty_list() {
        let html = render_sections(&[section("C", &[])], Escaping::Html);
        assert!(html.contains("<ul>\n\t</ul>"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn test_no_sections_renders_nothing() {
        assert_eq!(render_sections(&[], Escaping::Html), "");
    }

    #[test]
    fn test_markup_in_names_is_escaped_by_default() {
        let sections = [section(
            "<img src=x onerror=alert(1)>",
            &[("<b>Mail</b>", "mail", "\"><script>alert(1)</script>")],
        )];
        let html = render_sections(&sections, Escaping::Html);
        assert!(html.contains("<h3>&lt;img src=x onerror=alert(1)&gt;</h3>"));
        assert!(html.contains("&lt;b&gt;Mail&lt;/b&gt;"));
        assert!(html.contains("href=\"&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_trusted_mode_embeds_verbatim() {
        let sections = [section("<em>Work</em>", &[("<b>Mail</b>", "mail", "u")])];
        let html = render_sections(&sections, Escaping::Trusted);
        assert!(html.contains("<h3><em>Work</em></h3>"));
        assert!(html.contains("<a href=\"u\"><b>Mail</b></a>"));
    }
}
