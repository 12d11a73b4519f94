use {
    crate::{
        config::TICKER,
        domain::TokenRecord,
        utils::{AppInstant, format_percent, format_price},
    },
    eframe::egui::{Color32, FontId, Pos2, Rect, Sense, Ui, Vec2},
    std::sync::LazyLock,
};

static TAPE_EPOCH: LazyLock<AppInstant> = LazyLock::new(AppInstant::now);

struct TapeItem {
    /// `None` for a static message.
    token_id: Option<String>,
    label: String,
    price: f64,
    change_pct: f64,
}

/// Scrolling price tape. Hover pauses it, drag scrubs it, clicking a token
/// returns its id.
#[derive(Default)]
pub struct TapeState {
    offset: f32,
    items: Vec<TapeItem>,
    is_hovered: bool,
    is_dragging: bool,
}

impl TapeState {
    /// Rebuilds the items from the latest token list. Cheap enough to run
    /// whenever a new snapshot arrives.
    pub fn update_data(&mut self, tokens: &[TokenRecord]) {
        self.items.clear();
        for token in tokens {
            self.items.push(TapeItem {
                token_id: Some(token.id.clone()),
                label: token.name.clone(),
                price: token.price,
                change_pct: token.price_change_24h,
            });
        }
        for message in TICKER.tape.custom_messages {
            self.items.push(TapeItem {
                token_id: None,
                label: message.to_string(),
                price: 0.0,
                change_pct: 0.0,
            });
        }
    }

    fn format_item(item: &TapeItem) -> String {
        if item.token_id.is_none() {
            return item.label.clone();
        }
        format!(
            "{} {} ({})",
            item.label,
            format_price(item.price),
            format_percent(item.change_pct)
        )
    }

    fn item_color(&self, item: &TapeItem, x: f32) -> Color32 {
        let tape = &TICKER.tape;
        if item.token_id.is_none() {
            if tape.rainbow_mode {
                rainbow_color(x)
            } else {
                tape.text_color_message
            }
        } else if item.change_pct > 0.0 {
            tape.text_color_up
        } else if item.change_pct < 0.0 {
            tape.text_color_down
        } else {
            tape.text_color_neutral
        }
    }

    pub fn render(&mut self, ui: &mut Ui) -> Option<String> {
        let tape = &TICKER.tape;
        let rect = ui.available_rect_before_wrap();
        let height = tape.height;
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), height));
        let response = ui.allocate_rect(panel_rect, Sense::click_and_drag());
        ui.painter()
            .rect_filled(panel_rect, 0.0, tape.background_color);

        self.is_hovered = response.hovered();
        self.is_dragging = response.dragged();

        if self.is_dragging {
            self.offset += response.drag_delta().x;
        } else if !self.is_hovered {
            // Clamp dt so a slow frame does not make the tape jump.
            let dt = ui.input(|i| i.stable_dt).min(0.05);
            self.offset -= tape.speed_pixels_per_sec * dt;
        }

        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(tape.font_size);

        let mut total_width = 0.0;
        for item in &self.items {
            let galley =
                painter.layout_no_wrap(Self::format_item(item), font_id.clone(), Color32::WHITE);
            total_width += galley.size().x + tape.item_spacing;
        }
        if total_width < 1.0 {
            return None;
        }

        // Keep the offset in (-total_width, 0] so the loop below wraps cleanly.
        self.offset %= total_width;
        if self.offset > 0.0 {
            self.offset -= total_width;
        }

        let screen_width = panel_rect.width();
        let loops_needed = (screen_width / total_width).ceil() as i32 + 2;
        let mut clicked = None;

        for loop_idx in 0..loops_needed {
            let mut x = self.offset + loop_idx as f32 * total_width;

            for item in &self.items {
                let color = self.item_color(item, x);
                let galley = painter.layout_no_wrap(Self::format_item(item), font_id.clone(), color);
                let size = galley.size();

                if x + size.x > 0.0 && x < screen_width {
                    let pos = Pos2::new(
                        (panel_rect.min.x + x).round(),
                        (panel_rect.min.y + (height - size.y) / 2.0).round(),
                    );
                    painter.galley(pos, galley, color);

                    if response.clicked() {
                        if let (Some(pointer), Some(id)) =
                            (response.interact_pointer_pos(), &item.token_id)
                        {
                            let item_rect = Rect::from_min_size(pos, Vec2::new(size.x, height));
                            if item_rect.contains(pointer) {
                                clicked = Some(id.clone());
                            }
                        }
                    }
                }
                x += size.x + tape.item_spacing;
            }
        }

        if !self.is_hovered && !self.is_dragging {
            ui.ctx().request_repaint();
        }
        clicked
    }
}

fn rainbow_color(x_pos: f32) -> Color32 {
    let time = TAPE_EPOCH.elapsed().as_secs_f64();
    let phase = x_pos as f64 * 0.005 + time * TICKER.tape.rainbow_speed;

    let r = ((phase.sin() * 127.0) + 128.0) as u8;
    let g = (((phase + 2.0).sin() * 127.0) + 128.0) as u8;
    let b = (((phase + 4.0).sin() * 127.0) + 128.0) as u8;
    Color32::from_rgb(r, g, b)
}
