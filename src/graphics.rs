use std::collections::HashMap;
use std::path::Path;

use macroquad::prelude::*;

use crate::game::params::Params;
use crate::game::render::{DrawCall, RenderSurface, SpriteId};

const BACKGROUND: Color = Color::new(0.55, 0.75, 0.45, 1.0);
const LETTERBOX: Color = BLACK;

/// Loaded sprite textures. Sprites that failed to load are simply absent.
#[derive(Default)]
pub struct SpriteBank {
    textures: HashMap<SpriteId, Texture2D>,
}

impl SpriteBank {
    /// Loads the shadow, leader and every roster sheet from `params.asset_dir`.
    ///
    /// Missing files are logged and skipped; drawing them later is a no-op.
    pub async fn load(params: &Params) -> Self {
        let mut bank = Self::default();

        let mut wanted = vec![
            (SpriteId::Shadow, params.shadow_sprite.as_str()),
            (SpriteId::Leader, params.leader_sprite.as_str()),
        ];
        for (i, member) in params.roster.iter().enumerate() {
            wanted.push((SpriteId::Member(i), member.sprite.as_str()));
        }

        for (id, file) in wanted {
            let path = Path::new(&params.asset_dir).join(file);
            let path = path.to_string_lossy();
            match load_texture(&path).await {
                Ok(texture) => {
                    // pixel art, keep hard edges
                    texture.set_filter(FilterMode::Nearest);
                    bank.textures.insert(id, texture);
                }
                Err(e) => tracing::warn!(?id, %path, error = %e, "sprite not loaded"),
            }
        }

        tracing::info!(loaded = bank.textures.len(), "sprites ready");
        bank
    }

    /// Texture for `id`, if it loaded.
    pub fn get(&self, id: SpriteId) -> Option<&Texture2D> {
        self.textures.get(&id)
    }
}

/// Draws into the current macroquad camera.
///
/// Expects [`begin_game_camera`] to have been called for the frame.
pub struct WindowSurface<'a> {
    bank: &'a SpriteBank,
    width: f32,
    height: f32,
}

impl<'a> WindowSurface<'a> {
    /// Surface of the logical game size, drawing textures from `bank`.
    pub fn new(bank: &'a SpriteBank, params: &Params) -> Self {
        Self {
            bank,
            width: params.game_width,
            height: params.game_height,
        }
    }
}

impl RenderSurface for WindowSurface<'_> {
    fn clear(&mut self) {
        // clear_background would also wipe the letterbox bars
        draw_rectangle(0.0, 0.0, self.width, self.height, BACKGROUND);
    }

    fn draw_image(&mut self, call: &DrawCall) {
        let Some(texture) = self.bank.get(call.sprite) else {
            return;
        };
        let dest = normalize(call.dest);
        draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                source: call.source,
                ..Default::default()
            },
        );
    }
}

/// Turns a rectangle with negative extents into the equivalent positive one.
pub fn normalize(rect: Rect) -> Rect {
    let (x, w) = if rect.w < 0.0 {
        (rect.x + rect.w, -rect.w)
    } else {
        (rect.x, rect.w)
    };
    let (y, h) = if rect.h < 0.0 {
        (rect.y + rect.h, -rect.h)
    } else {
        (rect.y, rect.h)
    };
    Rect::new(x, y, w, h)
}

/// Largest centered rectangle inside the window with the game's aspect ratio.
pub fn fit_viewport(window_w: f32, window_h: f32, game_w: f32, game_h: f32) -> Rect {
    let scale = (window_w / game_w).min(window_h / game_h);
    let w = game_w * scale;
    let h = game_h * scale;
    Rect::new((window_w - w) / 2.0, (window_h - h) / 2.0, w, h)
}

/// Sets up a camera mapping the logical game surface onto the fitted viewport.
///
/// Everything drawn afterwards uses game coordinates.
pub fn begin_game_camera(params: &Params) {
    clear_background(LETTERBOX);

    let view = fit_viewport(
        screen_width(),
        screen_height(),
        params.game_width,
        params.game_height,
    );
    let mut camera =
        Camera2D::from_display_rect(Rect::new(0.0, 0.0, params.game_width, params.game_height));
    camera.viewport = Some((
        view.x as i32,
        view.y as i32,
        view.w as i32,
        view.h as i32,
    ));
    set_camera(&camera);
}

/// Returns to screen-space drawing (for the overlay).
pub fn end_game_camera() {
    set_default_camera();
}
