use super::*;
use pretty_assertions::assert_eq;

#[test]
fn spec_shape() {
    let spec = emoji_spec();
    assert_eq!(spec.name, EMOJI_NODE_NAME);
    assert_eq!(
        spec.attr("style"),
        Some(&AttrSpec {
            name: "style",
            default: Some("")
        })
    );
    assert_eq!(spec.attr("data-name").map(|a| a.default), Some(None));
    assert_eq!(spec.attr("title"), None);
    assert!(spec.inline);
    assert!(!spec.selectable);
    assert!(!spec.allows_marks());
    assert_eq!(spec.content, "text*");
    assert_eq!(spec.group, "inline");
    assert_eq!(
        spec.parse_rules,
        &[ParseRule {
            tag: "strong",
            class: "emoji",
            preserve_whitespace: PreserveWhitespace::Full,
        }]
    );
}

#[test]
fn rendered_element_reconstructs() {
    let table = lookup();
    let options = Options::default();
    let el = render_element(
        &NodeEmoji::new("tada"),
        &options,
        &Plugins::with_glyph_lookup(&table),
    );
    assert_eq!(
        parse_element(&el, &options),
        ParseMatch::Match(NodeEmoji::new("tada"))
    );
}

#[test]
fn marker_without_name_is_rejected() {
    let options = Options::default();
    let el = Element::new("strong")
        .with_attr("class", "emoji")
        .with_text("😄");
    assert_eq!(parse_element(&el, &options), ParseMatch::NoMatch);

    let el = el.with_attr("data-name", "");
    assert_eq!(parse_element(&el, &options), ParseMatch::NoMatch);
    assert_eq!(parse_element(&el, &options).into_option(), None);
}

#[test]
fn fallback_element_reads_back_as_markup_text() {
    let table = lookup();
    let options = Options::default();
    let el = render_element(
        &NodeEmoji::new("diego"),
        &options,
        &Plugins::with_glyph_lookup(&table),
    );

    // Not an emoji node; the host keeps the text, which is the markup form.
    assert!(!parse_element(&el, &options).is_match());
    assert_eq!(el.text_content(), to_markup(&NodeEmoji::new("diego")));
}

#[test]
fn tag_and_marker_class_must_match() {
    let options = Options::default();
    let named = |tag: &str, class: &str| {
        Element::new(tag)
            .with_attr("class", class)
            .with_attr("data-name", "smile")
    };

    assert!(!parse_element(&named("span", "emoji smile"), &options).is_match());
    assert!(!parse_element(&named("strong", "emojis smile"), &options).is_match());
    assert!(!parse_element(&Element::new("strong").with_attr("data-name", "smile"), &options).is_match());
    assert!(parse_element(&named("STRONG", "emoji"), &options).is_match());
    assert!(parse_element(&named("strong", "big  emoji\tshiny"), &options).is_match());
}

#[test]
fn only_the_name_is_read_back() {
    let options = Options::default();
    let el = Element::new("strong")
        .with_attr("class", "emoji smile")
        .with_attr("data-name", "smile")
        .with_attr("style", "color: red");
    assert_eq!(
        parse_element(&el, &options),
        ParseMatch::Match(NodeEmoji {
            name: Some("smile".to_string()),
            style: None,
        })
    );
}

#[test]
fn reconstruction_follows_render_options() {
    let mut options = Options::default();
    options.render.tag = "span".to_string();
    options.render.name_attribute = "data-emoji".to_string();

    let el = Element::new("span")
        .with_attr("class", "emoji")
        .with_attr("data-emoji", "tada");
    assert!(parse_element(&el, &options).is_match());
    assert!(!parse_element(&el, &Options::default()).is_match());
}
