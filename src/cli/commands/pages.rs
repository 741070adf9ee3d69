use crate::errors::AppResult;
use crate::ui::pages::{self, Page, navbar};

/// Static pages reachable from the navigation bar.
pub fn handle(page: Page) -> AppResult<()> {
    println!("{}", navbar(page));
    match page {
        Page::About => println!("{}", pages::about()),
        Page::Contact => println!("{}", pages::contact()),
        Page::Home => {}
    }
    Ok(())
}
