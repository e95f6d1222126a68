/// Virtual pixel height of one listing row.
pub const ROW_HEIGHT: u32 = 72;
pub const VIEWPORT_HEIGHT: u32 = 720;
/// One "down" command scrolls half a viewport.
pub const SCROLL_STEP: u32 = VIEWPORT_HEIGHT / 2;
pub const DESCRIPTION_PREVIEW_CHARS: usize = 400;
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const HELP: &str = "\
commands: search <text> | down | up | open <n> | save [n] | filter remote|full-time|part-time|clear
          apply [n] | name <..> | email <..> | linkedin <url> | resume <path> | submit | cancel
          saved | jobs | ok (dismiss notice) | help | quit";
