//! Single radial word clock following the machine's local time.

use anyhow::Result;

use wordclock_core::ZoneSpec;
use wordclock_engine::logging::{init_logging, LoggingConfig};
use wordclock_studio::fonts;
use wordclock_ui::Application;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (regular, bold) = fonts::load_fonts()?;

    Application::new()
        .title("Radial Word Clock")
        .font(regular)
        .bold_font(bold)
        .zones(&[ZoneSpec::LOCAL])
        .signature("Made with <3 by Luise")
        .run()
}
