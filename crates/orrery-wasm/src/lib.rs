//! WASM bindings for generating and animating gravitating systems.
//!
//! The browser host owns the animation loop: it creates a simulation once,
//! places a circle per body sized from the body's radius, fits its view box
//! from the reported viewport, then calls [`simulation_tick`] from each
//! `requestAnimationFrame` callback and moves the circles to the returned
//! positions. One tick is one fixed [`FRAME_TIMESTEP`] integration step, so
//! simulated speed follows the host's frame rate.
//!
//! Simulation state lives in thread-local storage (WASM is single-threaded)
//! behind opaque `u32` ids; snapshots cross the boundary as serialized
//! values.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const simId = simulation_create(null);          // or a UUID string
//! const viewBox = simulation_viewport(simId);
//! svg.setAttribute("viewBox",
//!   [viewBox.minX, viewBox.minY, viewBox.width, viewBox.height].join(" "));
//!
//! const markers = simulation_bodies(simId).map(body => makeCircle(body));
//!
//! function frame() {
//!   const positions = simulation_tick(simId);
//!   positions.forEach(([x, y], i) => moveCircle(markers[i], x, y));
//!   window.requestAnimationFrame(frame);
//! }
//! window.requestAnimationFrame(frame);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use cosmogony::{generate_system, generate_system_random, StellarSystem, SystemMetadata};
use nbody::forces::DirectGravity;
use nbody::integrator::{Euler, Integrator};
use nbody::state::SimState;

/// Fixed integration step applied once per animation frame. There is no
/// wall-clock measurement: simulated speed is tied to the host's invocation
/// rate.
pub const FRAME_TIMESTEP: f64 = 0.05;

/// Padding factor around the outermost body when fitting the view box.
pub const VIEWPORT_MARGIN: f64 = 1.1;

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// =============================================================================
// Thread-local storage for simulation state
// =============================================================================

struct Simulation {
    metadata: SystemMetadata,
    state: SimState,
    integrator: Euler,
    force: DirectGravity,
    viewport: Viewport,
}

thread_local! {
    static SIMULATIONS: RefCell<HashMap<u32, Simulation>> = RefCell::new(HashMap::new());
    static NEXT_SIM_ID: RefCell<u32> = const { RefCell::new(0) };
}

// =============================================================================
// Serializable types for JavaScript interop
// =============================================================================

/// Creation-time body record for the render host.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    /// Stable index into the per-frame position array.
    pub id: u32,
    pub mass: f64,
    /// Marker radius, `mass^(1/3)`.
    pub radius: f64,
    /// Position `[x, y]`.
    pub position: [f64; 2],
    /// Velocity `[x, y]`.
    pub velocity: [f64; 2],
}

/// Square view box fitted around the system at generation time.
///
/// One-time presentational value: it spans [`VIEWPORT_MARGIN`] times the
/// largest origin distance of any body when the simulation was created and
/// is not updated as bodies move.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    fn fit(state: &SimState) -> Self {
        let width = 2.0 * state.max_origin_distance() * VIEWPORT_MARGIN;
        Viewport {
            min_x: -width / 2.0,
            min_y: -width / 2.0,
            width,
            height: width,
        }
    }
}

// =============================================================================
// Simulation management
// =============================================================================

fn generate(id: Option<String>) -> Result<StellarSystem, JsError> {
    match id {
        Some(text) => {
            let id = Uuid::parse_str(&text).map_err(|e| JsError::new(&e.to_string()))?;
            Ok(generate_system(id))
        }
        None => Ok(generate_system_random()),
    }
}

fn build_simulation(system: &StellarSystem) -> Simulation {
    let mut state = SimState::new();
    for body in system.bodies() {
        state.add_body(body.mass, body.position, body.velocity);
    }
    let viewport = Viewport::fit(&state);

    Simulation {
        metadata: system.metadata.clone(),
        state,
        integrator: Euler,
        force: DirectGravity::new(),
        viewport,
    }
}

fn with_simulation<T>(
    sim_id: u32,
    f: impl FnOnce(&mut Simulation) -> Result<T, JsError>,
) -> Result<T, JsError> {
    SIMULATIONS.with(|sims| {
        let mut sims = sims.borrow_mut();
        let sim = sims
            .get_mut(&sim_id)
            .ok_or_else(|| JsError::new(&format!("Simulation {} not found", sim_id)))?;
        f(sim)
    })
}

/// Generate a system and set up its simulation.
///
/// # Arguments
/// * `id` - Optional UUID string; omitted means a fresh random system. The
///   same UUID always reproduces the same system.
///
/// # Returns
/// A simulation id for use with the other functions.
#[wasm_bindgen]
pub fn simulation_create(id: Option<String>) -> Result<u32, JsError> {
    let system = generate(id)?;
    let simulation = build_simulation(&system);

    let sim_id = NEXT_SIM_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SIMULATIONS.with(|sims| {
        sims.borrow_mut().insert(sim_id, simulation);
    });

    Ok(sim_id)
}

/// Delete a simulation to free memory.
#[wasm_bindgen]
pub fn simulation_delete(sim_id: u32) {
    SIMULATIONS.with(|sims| {
        sims.borrow_mut().remove(&sim_id);
    });
}

// =============================================================================
// State queries
// =============================================================================

/// Creation-time records for every body, in index order: the render host
/// uses these once to place and size its markers.
#[wasm_bindgen]
pub fn simulation_bodies(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| {
        let bodies: Vec<BodySnapshot> = sim
            .state
            .bodies
            .iter()
            .map(|b| BodySnapshot {
                id: b.id.0,
                mass: b.mass,
                radius: b.radius,
                position: [b.position.x, b.position.y],
                velocity: [b.velocity.x, b.velocity.y],
            })
            .collect();
        to_js(&bodies)
    })
}

/// The view box fitted when the simulation was created.
#[wasm_bindgen]
pub fn simulation_viewport(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&sim.viewport))
}

/// Identity of the generated system (UUID, names).
#[wasm_bindgen]
pub fn simulation_metadata(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&sim.metadata))
}

/// Current simulated time.
#[wasm_bindgen]
pub fn simulation_time(sim_id: u32) -> Result<f64, JsError> {
    with_simulation(sim_id, |sim| Ok(sim.state.time))
}

/// Nested JSON snapshot of a generated system, without setting up a
/// simulation. Same UUID contract as [`simulation_create`].
#[wasm_bindgen]
pub fn system_json(id: Option<String>) -> Result<String, JsError> {
    let system = generate(id)?;
    system
        .snapshot()
        .to_json()
        .map_err(|e| JsError::new(&e.to_string()))
}

// =============================================================================
// Simulation stepping
// =============================================================================

/// Advance one animation frame: a single [`FRAME_TIMESTEP`] step.
///
/// # Returns
/// Every body's `[x, y]` position, in the index order of
/// [`simulation_bodies`], ready for the host to move its markers.
#[wasm_bindgen]
pub fn simulation_tick(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| {
        sim.integrator
            .step(&mut sim.state, FRAME_TIMESTEP, &sim.force);

        let positions: Vec<[f64; 2]> = sim
            .state
            .bodies
            .iter()
            .map(|b| [b.position.x, b.position.y])
            .collect();
        to_js(&positions)
    })
}

/// Advance many steps at once, e.g. to fast-forward off-screen.
///
/// # Returns
/// The simulated time after integration.
#[wasm_bindgen]
pub fn simulation_integrate(sim_id: u32, dt: f64, n_steps: usize) -> Result<f64, JsError> {
    with_simulation(sim_id, |sim| {
        Ok(sim.integrator.integrate(&mut sim.state, dt, n_steps, &sim.force))
    })
}
