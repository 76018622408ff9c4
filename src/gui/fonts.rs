// src/gui/fonts.rs
// egui's bundled fonts have no Hangul glyphs; borrow one from the system if present.

use std::{fs, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const HANGUL_FONT: &str = "hangul";

const CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/NanumGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

pub fn install(ctx: &egui::Context) {
    let found = CANDIDATES
        .iter()
        .find_map(|p| fs::read(p).ok().map(|bytes| (*p, bytes)));

    let Some((path, bytes)) = found else {
        logw!("Fonts: no Hangul font found; Korean text will not render");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(s!(HANGUL_FONT), Arc::new(FontData::from_owned(bytes)));
    // Fallback only: Latin text keeps the default look.
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!(HANGUL_FONT));
    }
    ctx.set_fonts(fonts);
    logf!(path, "Fonts: Hangul fallback installed");
}
