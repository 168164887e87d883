//! Frame composition: sky, target, bow, arrow
//!
//! Draw order is fixed - background, target, bow and bowstring, then the
//! arrow - and always reads post-tick state.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::{Color, DrawSurface, Paint};
use crate::consts::{BOW_LIMB_RADIUS, SURFACE_HEIGHT};
use crate::sim::GameState;

const SKY_TOP: Color = Color::rgb(0x87, 0xCE, 0xEB);
const SKY_BOTTOM: Color = Color::rgb(0x46, 0x82, 0xB4);

/// Ring fractions of the target radius with their colors, outermost first
const RINGS: [(f32, Color); 5] = [
    (1.0, Color::rgb(0xFF, 0x6B, 0x6B)),
    (0.8, Color::rgb(0x4E, 0xCD, 0xC4)),
    (0.6, Color::rgb(0x45, 0xB7, 0xAF)),
    (0.4, Color::rgb(0x96, 0xCE, 0xB4)),
    (0.2, Color::rgb(0xFF, 0xEE, 0xAD)),
];
const RING_OUTLINE: Color = Color::rgb(0x33, 0x33, 0x33);

const BOW_DARK: Color = Color::rgb(0x8B, 0x45, 0x13);
const BOW_LIGHT: Color = Color::rgb(0xD2, 0x69, 0x1E);
const BOWSTRING: Color = Color::rgb(0xFF, 0xFF, 0xFF);

const SHAFT: Color = Color::rgb(0xFF, 0xD7, 0x00);
const ARROWHEAD: Color = Color::rgb(0xC0, 0xC0, 0xC0);

const SHAFT_LENGTH: f32 = 25.0;
/// Arrowhead outline in arrow-local space, tip at the origin, flying +x
const HEAD: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(-8.0, 4.0),
    Vec2::new(-3.0, 0.0),
    Vec2::new(-8.0, -4.0),
];

/// Draw one full frame of `state` onto `surface`.
pub fn draw(state: &GameState, surface: &mut impl DrawSurface) {
    draw_background(surface);
    draw_target(state, surface);
    draw_bow(state, surface);
    draw_arrow(state, surface);
}

fn draw_background(surface: &mut impl DrawSurface) {
    surface.clear(&Paint::Linear {
        from: Vec2::ZERO,
        to: Vec2::new(0.0, SURFACE_HEIGHT),
        start: SKY_TOP,
        end: SKY_BOTTOM,
    });
}

fn draw_target(state: &GameState, surface: &mut impl DrawSurface) {
    let center = state.target.center();
    for (fraction, color) in RINGS {
        surface.fill_circle(
            center,
            state.target.radius * fraction,
            &Paint::Solid(color),
            Some((RING_OUTLINE, 2.0)),
        );
    }
}

fn draw_bow(state: &GameState, surface: &mut impl DrawSurface) {
    let bow = state.bow;

    surface.stroke_arc(
        bow,
        BOW_LIMB_RADIUS,
        -FRAC_PI_2,
        FRAC_PI_2,
        &Paint::Linear {
            from: bow - Vec2::new(30.0, 0.0),
            to: bow + Vec2::new(30.0, 0.0),
            start: BOW_DARK,
            end: BOW_LIGHT,
        },
        5.0,
    );

    let top = bow - Vec2::new(0.0, BOW_LIMB_RADIUS);
    let bottom = bow + Vec2::new(0.0, BOW_LIMB_RADIUS);
    let string = Paint::Solid(BOWSTRING);
    if state.aim.drawing {
        surface.stroke_path(&[top, state.aim.draw_point, bottom], &string, 2.0);
    } else {
        surface.stroke_path(&[top, bottom], &string, 2.0);
    }
}

fn draw_arrow(state: &GameState, surface: &mut impl DrawSurface) {
    let Some(arrow) = state.arrow else {
        return;
    };

    let heading = Vec2::from_angle(arrow.vel.y.atan2(arrow.vel.x));
    let tail = arrow.pos + heading.rotate(Vec2::new(-SHAFT_LENGTH, 0.0));
    surface.stroke_path(&[arrow.pos, tail], &Paint::Solid(SHAFT), 3.0);

    let head: Vec<Vec2> = HEAD.iter().map(|p| arrow.pos + heading.rotate(*p)).collect();
    surface.fill_polygon(&head, &Paint::Solid(ARROWHEAD));
}
