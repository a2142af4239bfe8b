use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use winit::dpi::LogicalSize;

use wordclock_core::{format_clock, ClockFace, SystemClock, TimeSource, Zone, ZoneSpec};
use wordclock_engine::core::{App as EngineApp, AppControl, FrameCtx};
use wordclock_engine::device::GpuInit;
use wordclock_engine::input::{InputFrame, InputState, Key};
use wordclock_engine::render::shapes::{CircleRenderer, TextRenderer};
use wordclock_engine::scene::{DrawList, ZIndex};
use wordclock_engine::text::FontSystem;
use wordclock_engine::time::Tick;
use wordclock_engine::window::{Runtime, RuntimeConfig};

use crate::face_view::{ClockFaceView, Label};
use crate::layout::CanvasLayout;
use crate::theme::{FaceFonts, Theme};

// ── Application ───────────────────────────────────────────────────────────

/// Word clock application builder.
///
/// Configure zones and fonts, then start the event loop with [`run`](Self::run).
///
/// ```rust,ignore
/// Application::new()
///     .title("Radial Word Clock")
///     .font(load_font()?)
///     .zones(&[ZoneSpec::LOCAL])
///     .signature("Made with <3 by Luise")
///     .run()
/// ```
pub struct Application {
    title: String,
    size: Option<(f64, f64)>,
    font: Vec<u8>,
    bold_font: Option<Vec<u8>>,
    zones: Vec<ZoneSpec>,
    captions: bool,
    signature: Option<String>,
    theme: Theme,
    clock: Box<dyn TimeSource>,
    tick_interval: Duration,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "Radial Word Clock".to_string(),
            size: None,
            font: Vec::new(),
            bold_font: None,
            zones: vec![ZoneSpec::LOCAL],
            captions: false,
            signature: None,
            theme: Theme::default(),
            clock: Box::new(SystemClock),
            tick_interval: Duration::from_secs(1),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Override the initial window size. Defaults to the canvas size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Font used for every label. Required.
    pub fn font(mut self, data: Vec<u8>) -> Self {
        self.font = data;
        self
    }

    /// Optional bold face for lit phrases and the center hour.
    pub fn bold_font(mut self, data: Option<Vec<u8>>) -> Self {
        self.bold_font = data;
        self
    }

    /// One face per zone, left to right.
    pub fn zones(mut self, specs: &[ZoneSpec]) -> Self {
        self.zones = specs.to_vec();
        self
    }

    /// Show AM/PM, zone title and city under each face.
    pub fn captions(mut self, on: bool) -> Self {
        self.captions = on;
        self
    }

    /// Footer line, drawn where the canvas reserves room for one.
    pub fn signature(mut self, text: impl Into<String>) -> Self {
        self.signature = Some(text.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Where faces read the current instant from. Defaults to the system clock.
    pub fn time_source(mut self, clock: impl TimeSource + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Resolves zones, loads fonts and runs the event loop until the window
    /// closes.
    pub fn run(self) -> Result<()> {
        let canvas = CanvasLayout::for_faces(self.zones.len());
        let (width, height) = self
            .size
            .unwrap_or((canvas.size.width as f64, canvas.size.height as f64));

        let config = RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(width, height),
            tick_interval: self.tick_interval,
        };

        let state = ClockApp::new(self, canvas)?;
        log::info!("starting with {} face(s)", state.views.len());

        Runtime::run(config, GpuInit::default(), state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── ClockApp ──────────────────────────────────────────────────────────────

/// Internal state that implements `wordclock_engine::core::App`.
struct ClockApp {
    zones: Vec<Zone>,
    views: Vec<ClockFaceView>,
    signature: Option<Label>,
    clock: Box<dyn TimeSource>,

    canvas: CanvasLayout,
    theme: Theme,
    font_system: FontSystem,
    fonts: FaceFonts,

    draw_list: DrawList,
    circle_renderer: CircleRenderer,
    text_renderer: TextRenderer,
}

impl ClockApp {
    fn new(app: Application, canvas: CanvasLayout) -> Result<Self> {
        let zones = Zone::resolve_all(&app.zones).context("failed to resolve clock zones")?;

        let mut font_system = FontSystem::new();
        let regular = font_system
            .load_font(&app.font)
            .context("failed to load the label font")?;
        let bold = match app.bold_font.as_deref() {
            Some(bytes) => match font_system.load_font(bytes) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("bold font unusable ({e}); lit phrases use the regular face");
                    None
                }
            },
            None => None,
        };

        let views = build_views(&zones, &canvas, app.captions);
        let signature = match (canvas.signature, app.signature) {
            (Some(position), Some(text)) => Some(Label { text, position, lit: false }),
            _ => None,
        };

        Ok(Self {
            zones,
            views,
            signature,
            clock: app.clock,
            canvas,
            theme: app.theme,
            font_system,
            fonts: FaceFonts::new(regular, bold),
            draw_list: DrawList::new(),
            circle_renderer: CircleRenderer::new(),
            text_renderer: TextRenderer::new(),
        })
    }

    /// Reads every zone at `instant` and updates its view.
    fn refresh(&mut self, instant: DateTime<Utc>) {
        for (zone, view) in self.zones.iter().zip(self.views.iter_mut()) {
            let reading = zone.read(instant);
            let spec = zone.spec();
            log::debug!(
                "{} (24-hour): {}:{:02}, converted: {}",
                spec.title,
                reading.sample.hour(),
                reading.sample.minute(),
                format_clock(reading.sample, spec.invert_meridiem),
            );
            view.refresh(&reading);
        }
    }

    fn record(&mut self) {
        self.draw_list.clear();
        for view in &self.views {
            view.paint(&mut self.draw_list, &self.fonts, &self.theme);
        }
        if let Some(sig) = self.signature.as_ref() {
            self.draw_list.push_text_centered(
                ZIndex::LABEL,
                sig.text.as_str(),
                self.fonts.regular,
                self.theme.signature_size,
                self.theme.caption,
                sig.position,
            );
        }
    }
}

fn build_views(zones: &[Zone], canvas: &CanvasLayout, captions: bool) -> Vec<ClockFaceView> {
    zones
        .iter()
        .zip(canvas.faces.iter())
        .map(|(zone, layout)| {
            let view = ClockFaceView::new(ClockFace::default(), *layout);
            if captions { view.with_captions(zone.spec()) } else { view }
        })
        .collect()
}

/// Escape, or Ctrl/Cmd + Q or W.
fn quit_requested(input: &InputState, frame: &InputFrame) -> bool {
    frame.pressed(Key::Escape)
        || (input.modifiers.command() && (frame.pressed(Key::Q) || frame.pressed(Key::W)))
}

impl EngineApp for ClockApp {
    fn on_tick(&mut self, tick: Tick) -> AppControl {
        let now = self.clock.now();
        if tick.index == 0 {
            log::info!("first refresh at {now}");
        }
        self.refresh(now);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if quit_requested(ctx.input, ctx.input_frame) {
            log::info!("quit requested from keyboard");
            return AppControl::Exit;
        }

        self.record();

        let zoom = ctx.window.viewport().fit_scale(self.canvas.size);
        let clear = self.theme.background;

        let draw_list = &mut self.draw_list;
        let circles = &mut self.circle_renderer;
        let text = &mut self.text_renderer;
        let font_system = &self.font_system;

        ctx.render_scaled(zoom, clear, |rctx, target| {
            circles.render(rctx, target, draw_list);
            text.render(rctx, target, draw_list, font_system);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wordclock_core::{FixedClock, WORLD_ZONES};
    use wordclock_engine::input::{InputEvent, KeyState, Modifiers};
    use wordclock_engine::text::FontId;

    fn press(input: &mut InputState, frame: &mut InputFrame, key: Key, modifiers: Modifiers) {
        input.apply_event(frame, InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat: false });
    }

    fn command() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers { meta: true, ..Modifiers::default() }
        } else {
            Modifiers { ctrl: true, ..Modifiers::default() }
        }
    }

    /// A `ClockApp` without fonts; enough to exercise refresh and recording.
    fn app(specs: &[ZoneSpec], captions: bool, at: DateTime<Utc>) -> ClockApp {
        let zones = Zone::resolve_all(specs).unwrap();
        let canvas = CanvasLayout::for_faces(zones.len());
        let views = build_views(&zones, &canvas, captions);
        ClockApp {
            zones,
            views,
            signature: None,
            clock: Box::new(FixedClock(at)),
            canvas,
            theme: Theme::default(),
            font_system: FontSystem::new(),
            fonts: FaceFonts::new(FontId::from_raw(0), None),
            draw_list: DrawList::new(),
            circle_renderer: CircleRenderer::new(),
            text_renderer: TextRenderer::new(),
        }
    }

    #[test]
    fn escape_quits() {
        let (mut input, mut frame) = (InputState::default(), InputFrame::default());
        assert!(!quit_requested(&input, &frame));
        press(&mut input, &mut frame, Key::Escape, Modifiers::default());
        assert!(quit_requested(&input, &frame));
    }

    #[test]
    fn bare_q_does_not_quit() {
        let (mut input, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut input, &mut frame, Key::Q, Modifiers::default());
        assert!(!quit_requested(&input, &frame));
    }

    #[test]
    fn command_q_quits() {
        let (mut input, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut input, &mut frame, Key::Q, command());
        assert!(quit_requested(&input, &frame));
    }

    #[test]
    fn tick_refreshes_every_zone() {
        // 2024-01-15 18:30 UTC: 10:30 in LA, 18:30 in London, 00:00 in Kolkata.
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 18, 30, 0).unwrap();
        let mut app = app(&WORLD_ZONES, true, at);
        assert_eq!(app.on_tick(Tick { index: 0, missed: 0 }), AppControl::Continue);

        let centers: Vec<&str> = app.views.iter().map(|v| v.center().text.as_str()).collect();
        assert_eq!(centers, ["10", "6", "12 O'CLOCK"]);

        let meridiems: Vec<Option<&str>> = app.views.iter().map(|v| v.meridiem()).collect();
        assert_eq!(meridiems, [Some("AM"), Some("PM"), Some("PM")]);
    }

    #[test]
    fn record_paints_all_faces() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 18, 30, 0).unwrap();
        let mut app = app(&WORLD_ZONES, true, at);
        app.on_tick(Tick { index: 0, missed: 0 });
        app.record();
        let first = app.draw_list.len();
        assert!(first > 3 * 12);

        // Recording twice replaces the previous frame.
        app.record();
        assert_eq!(app.draw_list.len(), first);
    }

    #[test]
    fn single_face_has_no_captions() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 3, 7, 0).unwrap();
        let mut app = app(&[ZoneSpec::named("UTC", "", "UTC")], false, at);
        app.on_tick(Tick { index: 0, missed: 0 });
        assert_eq!(app.views.len(), 1);
        assert_eq!(app.views[0].meridiem(), None);
        assert_eq!(app.views[0].center().text, "3");
        assert_eq!(app.canvas, CanvasLayout::single());
    }

    #[test]
    fn unknown_zone_fails_before_window_opens() {
        let err = Application::new()
            .zones(&[ZoneSpec::named("Nowhere", "", "Not/AZone")])
            .font(vec![1, 2, 3]);
        let canvas = CanvasLayout::for_faces(1);
        let msg = format!("{:#}", ClockApp::new(err, canvas).err().unwrap());
        assert!(msg.contains("Not/AZone"), "{msg}");
    }

    #[test]
    fn missing_font_is_an_error() {
        let app = Application::new().zones(&[ZoneSpec::named("UTC", "", "UTC")]);
        let res = ClockApp::new(app, CanvasLayout::single());
        assert!(res.is_err());
    }
}
