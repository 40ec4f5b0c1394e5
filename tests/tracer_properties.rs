//! Properties of a single traced ray: distance, nearest hit, tie-break,
//! per-face texture orientation and misses.

mod common;

use cgmath::{InnerSpace, Vector3};
use common::*;
use voxel_raytracer::{
    build_targets, cast_ray, core::geometry::Ray, trace_ray, trace_ray_in_world, Block, BlockSide,
    Color, Coords, Texture, World, BACKGROUND,
};

#[test]
fn centre_of_front_face_is_hit_at_its_distance() {
    let world = world_with(&[(Coords::new(0, 0, 5), Block::uniform(gradient()))]);
    let targets = build_targets(&world);

    let centre = p(0.5, 0.5, 5.0);
    let distance = (centre - p(0.0, 0.0, 0.0)).magnitude();
    let ray = Ray::new(p(0.0, 0.0, 0.0), (centre - p(0.0, 0.0, 0.0)).normalize());

    let hit = cast_ray(&ray, &targets).expect("ray should hit the front face");
    assert!(
        (hit.t - distance).abs() < 1e-9,
        "t = {}, distance = {}",
        hit.t,
        distance
    );
    assert_eq!(hit.target, BlockSide::FRONT as usize);
    assert_eq!(hit.texel, (1, 1));
    assert_eq!(hit.color, Color::opaque([100, 100, 7]));
}

#[test]
fn nearest_cell_wins_whatever_its_coordinates() {
    let world = world_with(&[
        (Coords::new(0, 0, 5), Block::uniform(solid(RED))),
        (Coords::new(0, 0, 8), Block::uniform(solid(BLUE))),
    ]);
    let targets = build_targets(&world);

    let forward = Ray::new(p(0.5, 0.5, 0.0), Vector3::new(0.0, 0.0, 1.0));
    let hit = cast_ray(&forward, &targets).unwrap();
    assert_eq!(hit.color, Color::opaque(RED));
    assert_eq!(hit.t, 5.0);

    // From the other side the cell scanned last is the nearer one.
    let backward = Ray::new(p(0.5, 0.5, 20.0), Vector3::new(0.0, 0.0, -1.0));
    let hit = cast_ray(&backward, &targets).unwrap();
    assert_eq!(hit.color, Color::opaque(BLUE));
    assert_eq!(hit.t, 11.0);
}

#[test]
fn result_does_not_depend_on_insertion_order() {
    let a = (Coords::new(0, 0, 5), Block::uniform(solid(RED)));
    let b = (Coords::new(0, 0, 3), Block::uniform(solid(GREEN)));
    let ray = Ray::new(p(0.5, 0.5, 0.0), Vector3::new(0.0, 0.0, 1.0));

    let first = trace_ray_in_world(&ray, &world_with(&[a.clone(), b.clone()]));
    let second = trace_ray_in_world(&ray, &world_with(&[b, a]));
    assert_eq!(first, Color::opaque(GREEN));
    assert_eq!(first, second);
}

#[test]
fn equal_distance_hits_resolve_to_the_first_scanned_face() {
    // The ray meets the edge shared by the left and front faces, both at t = 1.
    let block = Block {
        left: solid(RED),
        front: solid(GREEN),
        ..Block::uniform(solid(GREY))
    };
    let world = world_with(&[(Coords::new(0, 0, 5), block)]);
    let targets = build_targets(&world);

    let ray = Ray::new(p(-1.0, 0.5, 4.0), Vector3::new(1.0, 0.0, 1.0));
    let hit = cast_ray(&ray, &targets).unwrap();
    assert_eq!(hit.t, 1.0);
    assert_eq!(hit.target, BlockSide::LEFT as usize);
    assert_eq!(hit.color, Color::opaque(RED));
}

/// Casts from `from` toward `to` and returns the sampled color.
fn look(world: &World, from: [f64; 3], to: [f64; 3]) -> Color {
    let ray = Ray::through(p(from[0], from[1], from[2]), p(to[0], to[1], to[2]));
    trace_ray(&ray, &build_targets(world))
}

fn marker_on(side: BlockSide) -> World {
    let mut block = Block::uniform(solid([1, 1, 1]));
    match side {
        BlockSide::LEFT => block.left = marker(),
        BlockSide::RIGHT => block.right = marker(),
        BlockSide::BOTTOM => block.bottom = marker(),
        BlockSide::TOP => block.top = marker(),
        BlockSide::FRONT => block.front = marker(),
        BlockSide::BACK => block.back = marker(),
    }
    world_with(&[(Coords::new(0, 0, 5), block)])
}

#[test]
fn front_and_back_faces_show_the_texture_upright() {
    for (side, eye_z, face_z) in [(BlockSide::FRONT, 0.0, 5.0), (BlockSide::BACK, 10.0, 6.0)] {
        let world = marker_on(side);
        // Texture top-left is at low x and high y.
        let tl = look(&world, [0.25, 0.75, eye_z], [0.25, 0.75, face_z]);
        let tr = look(&world, [0.75, 0.75, eye_z], [0.75, 0.75, face_z]);
        let bl = look(&world, [0.25, 0.25, eye_z], [0.25, 0.25, face_z]);
        let br = look(&world, [0.75, 0.25, eye_z], [0.75, 0.25, face_z]);
        assert_eq!(tl, Color::opaque(RED), "{side}");
        assert_eq!(tr, Color::opaque(GREEN), "{side}");
        assert_eq!(bl, Color::opaque(BLUE), "{side}");
        assert_eq!(br, Color::opaque(GREY), "{side}");
    }
}

#[test]
fn left_and_right_faces_show_the_texture_upright() {
    for (side, eye_x, face_x) in [(BlockSide::LEFT, -5.0, 0.0), (BlockSide::RIGHT, 6.0, 1.0)] {
        let world = marker_on(side);
        // Texture top-left is at low z and high y; texture x runs along z.
        let tl = look(&world, [eye_x, 0.75, 5.25], [face_x, 0.75, 5.25]);
        let tr = look(&world, [eye_x, 0.75, 5.75], [face_x, 0.75, 5.75]);
        let bl = look(&world, [eye_x, 0.25, 5.25], [face_x, 0.25, 5.25]);
        let br = look(&world, [eye_x, 0.25, 5.75], [face_x, 0.25, 5.75]);
        assert_eq!(tl, Color::opaque(RED), "{side}");
        assert_eq!(tr, Color::opaque(GREEN), "{side}");
        assert_eq!(bl, Color::opaque(BLUE), "{side}");
        assert_eq!(br, Color::opaque(GREY), "{side}");
    }
}

#[test]
fn bottom_and_top_faces_map_x_and_z_directly() {
    for (side, eye_y, face_y) in [(BlockSide::BOTTOM, -5.0, 0.0), (BlockSide::TOP, 6.0, 1.0)] {
        let world = marker_on(side);
        // Texture top-left is at low x and low z; texture y runs along z.
        let tl = look(&world, [0.25, eye_y, 5.25], [0.25, face_y, 5.25]);
        let tr = look(&world, [0.75, eye_y, 5.25], [0.75, face_y, 5.25]);
        let bl = look(&world, [0.25, eye_y, 5.75], [0.25, face_y, 5.75]);
        let br = look(&world, [0.75, eye_y, 5.75], [0.75, face_y, 5.75]);
        assert_eq!(tl, Color::opaque(RED), "{side}");
        assert_eq!(tr, Color::opaque(GREEN), "{side}");
        assert_eq!(bl, Color::opaque(BLUE), "{side}");
        assert_eq!(br, Color::opaque(GREY), "{side}");
    }
}

#[test]
fn far_edges_sample_the_last_texel() {
    let world = world_with(&[(Coords::new(0, 0, 5), Block::uniform(gradient()))]);
    let targets = build_targets(&world);

    // Exactly on the face's upper x edge and lower y edge.
    let ray = Ray::through(p(1.0, 0.0, 0.0), p(1.0, 0.0, 5.0));
    let hit = cast_ray(&ray, &targets).unwrap();
    assert_eq!(hit.texel, (2, 2));

    // Just inside the opposite corner.
    let ray = Ray::through(p(1e-12, 1.0 - 1e-12, 0.0), p(1e-12, 1.0 - 1e-12, 5.0));
    let hit = cast_ray(&ray, &targets).unwrap();
    assert_eq!(hit.texel, (0, 0));
}

#[test]
fn empty_world_is_always_background() {
    let world = World::new();
    for dir in [
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(-0.3, 0.2, 1.0),
        Vector3::new(0.0, 0.0, 0.0),
    ] {
        let ray = Ray::new(p(0.0, 0.0, 0.0), dir);
        assert_eq!(trace_ray_in_world(&ray, &world), BACKGROUND);
    }
}

#[test]
fn zero_direction_sees_background() {
    let world = world_with(&[
        (Coords::new(0, 0, 5), Block::uniform(solid(RED))),
        (Coords::new(-3, 2, 1), Block::uniform(solid(BLUE))),
    ]);
    let ray = Ray::new(p(0.1, 0.2, 0.3), Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(trace_ray_in_world(&ray, &world), BACKGROUND);
}

#[test]
fn rays_pointing_away_miss() {
    let world = world_with(&[(Coords::new(0, 0, 5), Block::uniform(solid(RED)))]);
    let ray = Ray::new(p(0.5, 0.5, 0.0), Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(trace_ray_in_world(&ray, &world), BACKGROUND);
}

#[test]
fn rays_passing_beside_a_cell_miss() {
    let world = world_with(&[(Coords::new(0, 0, 5), Block::uniform(solid(RED)))]);
    let ray = Ray::new(p(1.5, 0.5, 0.0), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(trace_ray_in_world(&ray, &world), BACKGROUND);
}

#[test]
fn single_pixel_texture_is_sampled_everywhere() {
    let world = world_with(&[(
        Coords::new(0, 0, 5),
        Block::uniform(std::sync::Arc::new(Texture::solid(1, 1, [3, 4, 5]))),
    )]);
    for (x, y) in [(0.0, 0.0), (0.999_999_999, 0.5), (1.0, 1.0), (0.5, 0.000_000_1)] {
        let ray = Ray::through(p(x, y, 0.0), p(x, y, 5.0));
        assert_eq!(trace_ray_in_world(&ray, &world), Color::opaque([3, 4, 5]));
    }
}

#[test]
fn ray_lying_in_a_face_plane_hits_the_crossing_face() {
    // Runs inside the plane z = 5 of the front face, which is skipped, and
    // enters the left face on its edge.
    let world = world_with(&[(Coords::new(0, 0, 5), Block::uniform(solid(RED)))]);
    let targets = build_targets(&world);
    let ray = Ray::new(p(-5.0, 0.5, 5.0), Vector3::new(1.0, 0.0, 0.0));

    let hit = cast_ray(&ray, &targets).unwrap();
    assert_eq!(hit.t, 5.0);
    assert_eq!(hit.target, BlockSide::LEFT as usize);
}
