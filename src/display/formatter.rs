//! Report printing using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print a Markdown report, styled on a colour terminal and verbatim otherwise
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        report_skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

fn report_skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();

    skin.headers[1].set_fg(Yellow);
    skin.headers[1].add_attr(Attribute::Bold);

    // fixed-width report rows
    skin.code_block.set_fg(Cyan);

    // remaining-to-goal figure
    skin.bold.set_fg(Magenta);
    skin.bold.add_attr(Attribute::Bold);

    skin
}
