use eframe::egui::{
    self, Align2, Color32, CornerRadius, FontId, Response, Sense, Vec2,
    load::{TextureLoadResult, TexturePoll},
};

const PLACEHOLDER_FILL: Color32 = Color32::from_rgb(236, 239, 241);
const PLACEHOLDER_GLYPH: &str = "🐾";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoState {
    Loading,
    Ready,
    Unavailable,
}

pub fn photo_state(result: &TextureLoadResult) -> PhotoState {
    match result {
        Ok(TexturePoll::Pending { .. }) => PhotoState::Loading,
        Ok(TexturePoll::Ready { .. }) => PhotoState::Ready,
        Err(_) => PhotoState::Unavailable,
    }
}

/// Draws the photo at `uri`, or a fixed placeholder when it cannot be loaded.
pub fn photo_with_fallback(ui: &mut egui::Ui, uri: &str, size: Vec2) -> Response {
    let image = egui::Image::from_uri(uri.to_owned()).fit_to_exact_size(size);
    let result = image.load_for_size(ui.ctx(), size);
    match photo_state(&result) {
        PhotoState::Unavailable => {
            if let Err(err) = &result {
                tracing::trace!(%uri, %err, "photo unavailable, drawing placeholder");
            }
            placeholder(ui, size)
        }
        PhotoState::Loading | PhotoState::Ready => ui.add(image),
    }
}

fn placeholder(ui: &mut egui::Ui, size: Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::same(6), PLACEHOLDER_FILL);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        PLACEHOLDER_GLYPH,
        FontId::proportional(size.y.min(size.x) / 4.0),
        Color32::GRAY,
    );
    response
}
