//! Worker thread owning the map, driven by a command channel.
//!
//! A [`VoxelMap`] is single-owner: all mutation goes through `&mut
//! self`. To share it across threads the map moves onto a dedicated
//! worker thread, and callers talk to it through a [`MapHandle`].
//! Mutations are fire-and-forget; queries and planning requests carry a
//! reply channel, so the caller decides when (and whether) to block on
//! the result.
//!
//! Input contracts are enforced on the calling thread: invalid points,
//! ground heights, and route endpoints are rejected synchronously and
//! never reach the worker.

use crate::config::{ConfigError, GhanaConfig};
use crate::core::{HorizontalBounds, VoxelCoord, WorldPoint};
use crate::error::{ensure_finite_endpoint, MapError, PlanError};
use crate::grid::OccupancyGrid;
use crate::map::{SnapshotOptions, VoxelMap};
use crate::pathfinding::Route;
use crate::voxel::Voxel;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, error, info, warn};
use std::thread::{self, JoinHandle};

/// Commands understood by the worker.
pub enum MapCommand {
    AddObservations(Vec<WorldPoint>),
    UpdateGround(f32),
    VoxelSnapshot {
        options: SnapshotOptions,
        reply: Sender<Vec<Voxel>>,
    },
    Bounds {
        reply: Sender<HorizontalBounds>,
    },
    Ground {
        reply: Sender<Option<f32>>,
    },
    PlanRoute {
        start: WorldPoint,
        end: WorldPoint,
        reply: Sender<Result<Route, PlanError>>,
    },
    PlanningGrid {
        start: WorldPoint,
        end: WorldPoint,
        reply: Sender<Result<OccupancyGrid, PlanError>>,
    },
    Shutdown,
}

/// Owns the map and processes commands until shutdown or disconnect.
pub struct MapWorker {
    map: VoxelMap,
    rx: Receiver<MapCommand>,
}

impl MapWorker {
    pub fn new(map: VoxelMap, rx: Receiver<MapCommand>) -> Self {
        MapWorker { map, rx }
    }

    /// Processes commands until [`MapCommand::Shutdown`] arrives or
    /// every sender is gone.
    pub fn run(&mut self) {
        info!("[MapWorker] started");
        while let Ok(command) = self.rx.recv() {
            if !self.handle_command(command) {
                break;
            }
        }
        info!("[MapWorker] stopped");
    }

    /// Returns false when the worker should stop.
    fn handle_command(&mut self, command: MapCommand) -> bool {
        match command {
            MapCommand::AddObservations(points) => {
                if let Err(e) = self.map.add_observations(&points) {
                    warn!("[MapWorker] dropped observation batch: {}", e);
                }
            }
            MapCommand::UpdateGround(height) => {
                if let Err(e) = self.map.update_ground(height) {
                    warn!("[MapWorker] dropped ground update: {}", e);
                }
            }
            MapCommand::VoxelSnapshot { options, reply } => {
                reply.send(self.map.voxel_snapshot(options)).ok();
            }
            MapCommand::Bounds { reply } => {
                reply.send(self.map.bounds()).ok();
            }
            MapCommand::Ground { reply } => {
                reply.send(self.map.ground()).ok();
            }
            MapCommand::PlanRoute { start, end, reply } => {
                reply.send(self.map.plan_route(&start, &end)).ok();
            }
            MapCommand::PlanningGrid { start, end, reply } => {
                reply.send(self.map.planning_grid(&start, &end)).ok();
            }
            MapCommand::Shutdown => {
                debug!("[MapWorker] shutdown requested");
                return false;
            }
        }
        true
    }
}

/// Caller-side handle to a spawned [`MapWorker`].
///
/// Dropping the handle without calling [`shutdown`](MapHandle::shutdown)
/// disconnects the command channel; the worker drains what it has and
/// exits on its own.
pub struct MapHandle {
    tx: Sender<MapCommand>,
    cell_size: f32,
    thread: JoinHandle<()>,
}

impl MapHandle {
    /// Validates the configuration, spawns the worker thread, and
    /// returns the handle to it.
    pub fn spawn(config: GhanaConfig) -> Result<MapHandle, ConfigError> {
        config.validate()?;
        let cell_size = config.map.cell_size;
        let (tx, rx) = unbounded();

        let thread = thread::Builder::new()
            .name("ghana-map-worker".to_string())
            .spawn(move || {
                let map = match VoxelMap::new(config) {
                    Ok(map) => map,
                    Err(e) => {
                        error!("[MapWorker] failed to create map: {}", e);
                        return;
                    }
                };
                MapWorker::new(map, rx).run();
            })
            .expect("Failed to spawn map worker thread");

        Ok(MapHandle {
            tx,
            cell_size,
            thread,
        })
    }

    /// Queues a batch of observations. The batch is validated here and
    /// rejected as a whole if any point is invalid.
    pub fn add_observations(&self, points: Vec<WorldPoint>) -> Result<(), MapError> {
        for point in &points {
            self.validate_point(point)?;
        }
        self.tx.send(MapCommand::AddObservations(points)).ok();
        Ok(())
    }

    /// Queues a ground height update.
    pub fn update_ground(&self, height: f32) -> Result<(), MapError> {
        if !height.is_finite() {
            return Err(MapError::NonFiniteGround(height));
        }
        self.tx.send(MapCommand::UpdateGround(height)).ok();
        Ok(())
    }

    /// Requests a voxel snapshot. The receiver yields exactly one
    /// reply; it is disconnected if the worker is gone.
    pub fn voxel_snapshot(&self, options: SnapshotOptions) -> Receiver<Vec<Voxel>> {
        let (reply, rx) = bounded(1);
        self.tx
            .send(MapCommand::VoxelSnapshot { options, reply })
            .ok();
        rx
    }

    /// Requests the current horizontal bounds.
    pub fn bounds(&self) -> Receiver<HorizontalBounds> {
        let (reply, rx) = bounded(1);
        self.tx.send(MapCommand::Bounds { reply }).ok();
        rx
    }

    /// Requests the current ground estimate.
    pub fn ground(&self) -> Receiver<Option<f32>> {
        let (reply, rx) = bounded(1);
        self.tx.send(MapCommand::Ground { reply }).ok();
        rx
    }

    /// Requests a route. Endpoint contracts are checked here; the
    /// planning outcome arrives through the receiver once the worker
    /// has processed everything queued before this request.
    pub fn plan_route(
        &self,
        start: WorldPoint,
        end: WorldPoint,
    ) -> Result<Receiver<Result<Route, PlanError>>, MapError> {
        ensure_finite_endpoint(&start)?;
        ensure_finite_endpoint(&end)?;
        let (reply, rx) = bounded(1);
        self.tx
            .send(MapCommand::PlanRoute { start, end, reply })
            .ok();
        Ok(rx)
    }

    /// Requests the occupancy grid with the planned route stamped in.
    pub fn planning_grid(
        &self,
        start: WorldPoint,
        end: WorldPoint,
    ) -> Result<Receiver<Result<OccupancyGrid, PlanError>>, MapError> {
        ensure_finite_endpoint(&start)?;
        ensure_finite_endpoint(&end)?;
        let (reply, rx) = bounded(1);
        self.tx
            .send(MapCommand::PlanningGrid { start, end, reply })
            .ok();
        Ok(rx)
    }

    /// Stops the worker and waits for it to finish.
    pub fn shutdown(self) {
        let MapHandle { tx, thread, .. } = self;
        tx.send(MapCommand::Shutdown).ok();
        drop(tx);
        if thread.join().is_err() {
            error!("[MapWorker] worker thread panicked");
        }
    }

    fn validate_point(&self, point: &WorldPoint) -> Result<(), MapError> {
        if !point.is_finite() {
            return Err(MapError::NonFiniteObservation {
                x: point.x,
                y: point.y,
                z: point.z,
            });
        }
        if VoxelCoord::from_world(point, self.cell_size).is_none() {
            return Err(MapError::QuantizationOverflow {
                x: point.x,
                y: point.y,
                z: point.z,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }
}
