//! lagoon: a small school of fish foraging between feeding spots.
//!
//! Scatters a school and a handful of points of interest inside a box,
//! runs the simulation at a fixed 30 Hz and prints where everyone ended up.
//!
//! Usage:
//!
//! ```text
//! RUST_LOG=info cargo run -p lagoon [-- scene.json]
//! ```
//!
//! The optional scene file overrides any subset of [`Scene`]'s fields:
//!
//! ```json
//! { "agent_count": 64, "sim": { "total_ticks": 900, "seed": 7 },
//!   "fish": { "speed": 4.0, "time_at_interest_point": 2.0 } }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use shoal_agent::{AgentConfig, AgentStoreBuilder};
use shoal_core::{Area, SimConfig, SimRng, Tick, Vec3};
use shoal_flock::TargetEvent;
use shoal_sim::{LogObserver, SimBuilder, SimObserver, TickSummary};
use shoal_target::TargetPool;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:           usize = 24;
const TARGET_COUNT:          usize = 5;
const SEED:                  u64   = 42;
const TICK_HZ:               f32   = 30.0;
const SIM_SECONDS:           u64   = 60;
const OUTPUT_INTERVAL_TICKS: u64   = 150; // log every 5 simulated seconds

// ── Scene ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scene {
    sim:          SimConfig,
    fish:         AgentConfig,
    agent_count:  usize,
    target_count: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            sim: SimConfig {
                dt_secs:               1.0 / TICK_HZ,
                total_ticks:           SIM_SECONDS * TICK_HZ as u64,
                seed:                  SEED,
                num_threads:           None, // Rayon's global pool
                output_interval_ticks: OUTPUT_INTERVAL_TICKS,
                area:                  Area::new(Vec3::ZERO, Vec3::new(24.0, 8.0, 24.0)),
            },
            fish:         AgentConfig::default(),
            agent_count:  AGENT_COUNT,
            target_count: TARGET_COUNT,
        }
    }
}

fn load_scene(path: &Path) -> Result<Scene> {
    let file = File::open(path).with_context(|| format!("opening scene {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing scene {}", path.display()))
}

// ── Observer wrapper to tally claims ──────────────────────────────────────────

struct TallyObserver {
    inner:     LogObserver,
    claims:    usize,
    releases:  usize,
    peak_busy: usize,
}

impl TallyObserver {
    fn new(inner: LogObserver) -> Self {
        Self { inner, claims: 0, releases: 0, peak_busy: 0 }
    }
}

impl SimObserver for TallyObserver {
    fn on_target_event(&mut self, tick: Tick, event: &TargetEvent) {
        match event {
            TargetEvent::Claimed { .. } => self.claims += 1,
            TargetEvent::Released { .. } => self.releases += 1,
        }
        self.inner.on_target_event(tick, event);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.peak_busy = self.peak_busy.max(summary.dwelling);
        self.inner.on_tick_end(summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let scene = match std::env::args().nth(1) {
        Some(path) => load_scene(Path::new(&path))?,
        None       => Scene::default(),
    };
    let config = scene.sim;

    println!("=== lagoon: shoal fish-school simulation ===");
    println!(
        "Fish: {}  |  Feeding spots: {}  |  Seed: {}",
        scene.agent_count, scene.target_count, config.seed
    );
    println!(
        "Sim: {} ticks of {:.4} s ({:.1} s simulated)",
        config.total_ticks,
        config.dt_secs,
        config.duration_secs()
    );
    println!();

    // 1. Scatter the school and the feeding spots from one master seed.
    let mut rng = SimRng::new(config.seed);
    let mut school_rng = rng.child(0);
    let mut spot_rng = rng.child(1);

    let agents = AgentStoreBuilder::new(scene.fish)
        .scatter(scene.agent_count, &config.area, &mut school_rng)
        .build();
    let targets = TargetPool::from_positions(
        (0..scene.target_count).map(|_| spot_rng.point_in(&config.area)),
    );
    info!("scattered {} fish and {} feeding spots", agents.count, targets.len());

    // 2. Build sim.
    let interval = config.output_interval_ticks;
    let mut sim = SimBuilder::new(config, agents)
        .targets(targets)
        .build()
        .context("building simulation")?;

    // 3. Run.
    let mut obs = TallyObserver::new(LogObserver::new(interval));
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  claims        : {}", obs.claims);
    println!("  releases      : {}", obs.releases);
    println!("  peak dwelling : {}", obs.peak_busy);
    println!();

    // 5. Final poses table.
    println!("{:<10} {:<12} {:<10} {:>26}", "Fish", "State", "Target", "Position");
    println!("{}", "-".repeat(61));
    for agent in sim.agents.agent_ids() {
        let i = agent.index();
        let target = sim.agents.target[i].map_or_else(|| "-".to_string(), |t| t.0.to_string());
        let p = sim.agents.position[i];
        println!(
            "{:<10} {:<12} {:<10} {:>26}",
            i,
            sim.agents.movement[i].as_str(),
            target,
            format!("({:7.2}, {:7.2}, {:7.2})", p.x, p.y, p.z),
        );
    }

    println!();
    println!("{:<10} {:<10} {:>26}", "Spot", "Free", "Position");
    println!("{}", "-".repeat(48));
    for spot in sim.targets.iter() {
        let p = spot.position;
        println!(
            "{:<10} {:<10} {:>26}",
            spot.id.0,
            if spot.available { "yes" } else { "no" },
            format!("({:7.2}, {:7.2}, {:7.2})", p.x, p.y, p.z),
        );
    }

    Ok(())
}
