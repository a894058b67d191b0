//! Dark slide theme: serif body, left-aligned content, coloured headings

pub const FONT_HREF: &str = "https://fonts.googleapis.com/css?family=Crimson+Text";

pub const ROOT: &str = "min-height: 100vh; margin: 0; background: #000; color: #d8d8d8; \
    font-family: \"Crimson Text\", serif; font-size: 32px; text-align: left; outline: none;";

pub const SLIDE: &str = "min-height: 100vh; box-sizing: border-box; display: flex; \
    flex-direction: column; align-items: flex-start; justify-content: flex-start; \
    gap: 1em; padding: 1em 2em 0 2em;";

pub const H1: &str = "color: #99ffcc; font-size: 1.5em; margin: 0;";
pub const H1_MARK: &str = "\u{2589} ";
pub const H2: &str = "color: #2b97d9; margin: 0;";
pub const H2_MARK: &str = "\u{258A} ";
pub const STRONG: &str = "color: white;";
pub const LINK: &str = "color: #9d7ff5;";
pub const LINE: &str = "display: flex; align-items: baseline; gap: 0.4em;";
pub const FOOTER: &str = "position: fixed; right: 1em; bottom: 0.5em; font-size: 16px; color: #4b5563;";
