#![no_main]
use emojinode::{parse_element, render_element, NodeEmoji, Options, ParseMatch, Plugins};
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    options: Options,
    emoji: NodeEmoji,
}

fuzz_target!(|input: Input| {
    // A name attribute called `class` collides with the marker class.
    if input.options.render.name_attribute == "class" {
        return;
    }
    let plugins = Plugins::default();
    let el = render_element(&input.emoji, &input.options, &plugins);
    if let ParseMatch::Match(back) = parse_element(&el, &input.options) {
        assert_eq!(back.name, input.emoji.name);
    }
});
