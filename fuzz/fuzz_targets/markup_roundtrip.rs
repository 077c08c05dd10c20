#![no_main]
use emojinode::{parse_token, to_markup, NodeEmoji, Token};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|emoji: NodeEmoji| {
    let markup = to_markup(&emoji);
    match emoji.truthy_name() {
        None => assert!(markup.is_empty()),
        Some(name) => {
            assert_eq!(markup, format!(":{}:", name));
            if name.trim() == name {
                let back = parse_token(&Token::new(&markup[1..markup.len() - 1]));
                assert_eq!(back.name.as_deref(), Some(name));
            }
        }
    }
});
