use anyhow::{bail, Result};

const REGULAR: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BOLD: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Environment variable that overrides the regular font path.
pub const FONT_ENV: &str = "WORDCLOCK_FONT";

fn first_readable(paths: &[&str]) -> Option<(String, Vec<u8>)> {
    paths
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (p.to_string(), bytes)))
}

/// Regular and (optional) bold label fonts.
pub fn load_fonts() -> Result<(Vec<u8>, Option<Vec<u8>>)> {
    let regular = match std::env::var(FONT_ENV) {
        Ok(path) => match std::fs::read(&path) {
            Ok(bytes) => Some((path, bytes)),
            Err(e) => bail!("{FONT_ENV}={path} is not readable: {e}"),
        },
        Err(_) => first_readable(REGULAR),
    };

    let Some((path, regular)) = regular else {
        bail!("no usable font found; install DejaVu Sans or set {FONT_ENV}");
    };
    log::info!("label font: {path}");

    let bold = first_readable(BOLD).map(|(path, bytes)| {
        log::debug!("bold font: {path}");
        bytes
    });
    Ok((regular, bold))
}
