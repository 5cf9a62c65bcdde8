//! Frame compositing: depth ordering and draw calls.
//!
//! The compositor only talks to a [`RenderSurface`], so it runs the same against
//! a macroquad window or a recording surface in tests.

use macroquad::math::Rect;
use serde::{Deserialize, Serialize};

use super::anim;
use super::facing::Facing;
use super::follow::PartyMember;
use super::motion::Leader;
use super::params::Params;

/// Which loaded image a draw call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    /// Drop shadow under every character.
    Shadow,
    /// Leader sprite sheet.
    Leader,
    /// Sprite sheet of the party member at this roster index.
    Member(usize),
}

/// Something to draw this frame. Rebuilt every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    /// Horizontal anchor.
    pub x: f32,
    /// Vertical anchor (the character's feet); also the depth key.
    pub y: f32,
    /// Facing, selects the sheet row.
    pub facing: Facing,
    /// Sprite cell width.
    pub width: f32,
    /// Sprite cell height.
    pub height: f32,
    /// Sheet to draw from.
    pub sprite: SpriteId,
}

/// One image blit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Image to draw.
    pub sprite: SpriteId,
    /// Region of the image, `None` for the whole image.
    pub source: Option<Rect>,
    /// Destination on the surface. A negative height extends upward from `y`.
    pub dest: Rect,
}

/// Target the compositor draws into.
pub trait RenderSurface {
    /// Clears the whole surface.
    fn clear(&mut self);

    /// Draws `call`. Drawing an image that is not loaded must be a no-op.
    fn draw_image(&mut self, call: &DrawCall);
}

/// Collects one drawable per party member, then the leader.
///
/// The leader goes last so that, after the stable depth sort, it stays on top of
/// members standing on the same row.
pub fn build_draw_list(leader: &Leader, party: &[PartyMember], params: &Params) -> Vec<Drawable> {
    let mut list: Vec<Drawable> = party
        .iter()
        .map(|member| Drawable {
            x: member.current.x,
            y: member.current.y,
            facing: member.current.facing,
            width: member.width,
            height: member.height,
            sprite: member.sprite,
        })
        .collect();

    list.push(Drawable {
        x: leader.x,
        y: leader.y,
        facing: leader.facing,
        width: params.leader_width,
        height: params.leader_height,
        sprite: SpriteId::Leader,
    });

    list
}

/// Orders drawables back to front by ascending `y`.
///
/// The sort is stable: on equal `y` the later entry is drawn later, i.e. on top.
pub fn sort_by_depth(list: &mut [Drawable]) {
    list.sort_by(|a, b| a.y.total_cmp(&b.y));
}

/// Shadow and sprite blits for one drawable, in draw order.
pub fn draw_calls(drawable: &Drawable, anim_phase: u32, params: &Params) -> [DrawCall; 2] {
    let x = drawable.x.floor();
    let y = drawable.y.floor();
    let cell = anim::select_cell(drawable.facing, anim_phase);

    let shadow = DrawCall {
        sprite: SpriteId::Shadow,
        source: None,
        dest: Rect::new(
            x + params.shadow_offset_x,
            y + params.shadow_offset_y,
            params.shadow_width,
            params.shadow_height,
        ),
    };

    let sprite = DrawCall {
        sprite: drawable.sprite,
        source: Some(Rect::new(
            cell.column as f32 * drawable.width,
            cell.row as f32 * drawable.height,
            drawable.width,
            drawable.height,
        )),
        dest: Rect::new(x, y, drawable.width, -drawable.height),
    };

    [shadow, sprite]
}

/// Clears `surface` and draws `list` in depth order.
///
/// Every character shares the leader's animation phase.
pub fn composite<S: RenderSurface + ?Sized>(
    surface: &mut S,
    mut list: Vec<Drawable>,
    anim_phase: u32,
    params: &Params,
) {
    sort_by_depth(&mut list);

    surface.clear();
    for drawable in &list {
        for call in draw_calls(drawable, anim_phase, params) {
            surface.draw_image(&call);
        }
    }
}
