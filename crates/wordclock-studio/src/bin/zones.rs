//! Three word clocks side by side: Pacific, Greenwich and Indian time.
//!
//! The IST face reports the opposite AM/PM label.

use anyhow::Result;

use wordclock_core::WORLD_ZONES;
use wordclock_engine::logging::{init_logging, LoggingConfig};
use wordclock_studio::fonts;
use wordclock_ui::Application;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (regular, bold) = fonts::load_fonts()?;

    Application::new()
        .title("Word Clock with AM/PM Flip for IST")
        .font(regular)
        .bold_font(bold)
        .zones(&WORLD_ZONES)
        .captions(true)
        .run()
}
