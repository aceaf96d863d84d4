//! Feeds a synthetic room into a map worker, plans a route across it,
//! and prints the resulting grid.
//!
//! Run with `RUST_LOG=debug` to watch the pipeline work.

use ghana_map::{GhanaConfig, MapHandle, MapSection, SnapshotOptions, WorldPoint};

fn room_scan() -> Vec<WorldPoint> {
    let mut points = Vec::new();
    // A 3.25m x 3.25m floor, observed twice per cell.
    for _ in 0..2 {
        for i in 0..13 {
            for j in 0..13 {
                points.push(WorldPoint::new(
                    0.125 + 0.25 * i as f32,
                    0.0,
                    0.125 + 0.25 * j as f32,
                ));
            }
        }
        // A wall across the room with a single gap.
        for j in 0..13 {
            if j == 6 {
                continue;
            }
            for &y in &[0.5, 0.75] {
                points.push(WorldPoint::new(1.625, y, 0.125 + 0.25 * j as f32));
            }
        }
    }
    points
}

fn main() {
    env_logger::init();

    let config = GhanaConfig {
        map: MapSection::default()
            .with_cell_size(0.25)
            .with_noise_level(2),
        ..GhanaConfig::default()
    };
    let handle = MapHandle::spawn(config).expect("config is valid");

    handle.add_observations(room_scan()).expect("points are finite");
    handle.update_ground(0.0).expect("height is finite");

    let voxels = handle
        .voxel_snapshot(SnapshotOptions::full())
        .recv()
        .expect("worker is alive");
    let bounds = handle.bounds().recv().expect("worker is alive");
    println!(
        "mapped {} voxels over {:.2}m x {:.2}m",
        voxels.len(),
        bounds.width(),
        bounds.depth()
    );

    let start = WorldPoint::new(0.125, 0.0, 0.125);
    let end = WorldPoint::new(3.125, 0.0, 3.125);

    match handle
        .plan_route(start, end)
        .expect("endpoints are finite")
        .recv()
        .expect("worker is alive")
    {
        Ok(route) => {
            println!(
                "route: {} cells, {:.2}m, {} expansions",
                route.length_cells(),
                route.length_meters(),
                route.expansions
            );
            for waypoint in route.waypoints.iter().take(4) {
                println!("  -> ({:.2}, {:.2}, {:.2})", waypoint.x, waypoint.y, waypoint.z);
            }
        }
        Err(e) => println!("no route: {}", e),
    }

    let grid = handle
        .planning_grid(start, end)
        .expect("endpoints are finite")
        .recv()
        .expect("worker is alive")
        .expect("grid is available");
    println!("{}", grid.to_ascii());

    handle.shutdown();
}
