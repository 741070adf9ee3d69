//! Static pages and the navigation bar shown above them.

use ansi_term::{Colour, Style};

pub const APP_TITLE: &str = "My Todo App";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Subcommand that opens the page.
    pub fn command(self) -> &'static str {
        match self {
            Page::Home => "list",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }
}

/// Title bar with the page links; the current page is highlighted.
pub fn navbar(current: Page) -> String {
    let links: Vec<String> = Page::ALL
        .iter()
        .map(|p| {
            if *p == current {
                Style::new().bold().underline().paint(p.label()).to_string()
            } else {
                format!("{} ({})", p.label(), Colour::Fixed(245).paint(p.command()))
            }
        })
        .collect();

    format!(
        "{}  |  {}\n",
        Colour::Cyan.bold().paint(APP_TITLE),
        links.join("  ")
    )
}

pub fn about() -> String {
    format!(
        "{}\n\n\
         {} is a small task list for the terminal.\n\n\
         Add tasks with an optional due date, mark them done and\n\
         find them again next time: the list is saved locally after\n\
         every change.\n\n\
         Version {}\n",
        Style::new().bold().paint("About"),
        APP_TITLE,
        env!("CARGO_PKG_VERSION"),
    )
}

pub fn contact() -> String {
    format!(
        "{}\n\n\
         Questions, ideas or bug reports are welcome.\n\n\
         Homepage:   {}\n\
         Repository: {}\n",
        Style::new().bold().paint("Contact"),
        env!("CARGO_PKG_HOMEPAGE"),
        env!("CARGO_PKG_REPOSITORY"),
    )
}
