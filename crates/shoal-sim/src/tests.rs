//! Integration tests for shoal-sim.

use shoal_agent::{AgentConfig, AgentStore, AgentStoreBuilder, MovementState};
use shoal_core::{AgentId, Area, Quat, SimConfig, SimRng, TargetId, Tick, Vec3};
use shoal_flock::TargetEvent;
use shoal_target::TargetPool;

use crate::{LogObserver, NoopObserver, Sim, SimBuilder, SimError, SimObserver, TickSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        dt_secs:               0.05,
        total_ticks,
        seed:                  42,
        num_threads:           Some(1),
        output_interval_ticks: total_ticks.max(1),
        area:                  Area::new(Vec3::ZERO, Vec3::splat(20.0)),
    }
}

/// A 100-unit cube: nothing in the single-agent tests reaches the walls.
fn open_water(total_ticks: u64) -> SimConfig {
    SimConfig { area: Area::new(Vec3::ZERO, Vec3::splat(100.0)), ..test_config(total_ticks) }
}

fn scattered(n: usize, config: &SimConfig, agent: AgentConfig) -> AgentStore {
    let mut rng = SimRng::new(config.seed);
    AgentStoreBuilder::new(agent).scatter(n, &config.area, &mut rng).build()
}

fn scattered_targets(n: usize, config: &SimConfig) -> TargetPool {
    let mut rng = SimRng::new(config.seed).child(1);
    TargetPool::from_positions((0..n).map(|_| rng.point_in(&config.area)))
}

/// Tuning that lets seeking dominate: short avoidance, no alignment, no
/// cohesion pull.  Agents reliably reach their targets.
fn eager() -> AgentConfig {
    AgentConfig {
        avoidance_radius:       0.5,
        alignment_distance:     0.0,
        cohesion_weight:        0.0,
        time_at_interest_point: 1.0,
        ..AgentConfig::default()
    }
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    ends:      Vec<TickSummary>,
    snapshots: Vec<Tick>,
    events:    Vec<(Tick, TargetEvent)>,
    sim_end:   Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_target_event(&mut self, tick: Tick, event: &TargetEvent) {
        self.events.push((tick, *event));
    }
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.ends.push(*summary);
    }
    fn on_snapshot(&mut self, tick: Tick, _agents: &AgentStore, _targets: &TargetPool) {
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.sim_end = Some(final_tick);
    }
}

/// Checks the ownership and containment rules at every snapshot.
struct Audit {
    area:       Area,
    checked:    usize,
    claims:     usize,
    releases:   usize,
    violations: Vec<String>,
}

impl Audit {
    fn new(area: Area) -> Self {
        Self { area, checked: 0, claims: 0, releases: 0, violations: Vec::new() }
    }
}

impl SimObserver for Audit {
    fn on_target_event(&mut self, _tick: Tick, event: &TargetEvent) {
        match event {
            TargetEvent::Claimed { .. } => self.claims += 1,
            TargetEvent::Released { .. } => self.releases += 1,
        }
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, targets: &TargetPool) {
        self.checked += 1;

        for target in targets.iter() {
            let holders = agents
                .agent_ids()
                .filter(|a| {
                    agents.movement[a.index()].is_dwelling()
                        && agents.target[a.index()] == Some(target.id)
                })
                .count();
            let expected = if target.available { 0 } else { 1 };
            if holders != expected {
                self.violations.push(format!(
                    "{tick}: {} (available = {}) has {holders} dwelling holders",
                    target.id, target.available,
                ));
            }
        }

        for agent in agents.agent_ids() {
            let i = agent.index();
            if agents.movement[i].is_dwelling() {
                let claimed = agents.target[i].and_then(|t| targets.is_available(t)) == Some(false);
                if !claimed {
                    self.violations.push(format!("{tick}: {agent} dwells without a claimed target"));
                }
            }
            if !self.area.contains(agents.position[i]) {
                self.violations.push(format!(
                    "{tick}: {agent} escaped to {:?}",
                    agents.position[i],
                ));
            }
        }
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let config = test_config(10);
        let agents = scattered(3, &config, AgentConfig::default());
        let sim = SimBuilder::new(config, agents).build().unwrap();
        assert_eq!(sim.agents.count, 3);
        assert!(sim.targets.is_empty());
        assert_eq!(sim.current_tick(), Tick::ZERO);
    }

    #[test]
    fn negative_dt_errors() {
        let config = SimConfig { dt_secs: -0.1, ..test_config(10) };
        let agents = scattered(1, &config, AgentConfig::default());
        let result = SimBuilder::new(config, agents).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn non_finite_area_errors() {
        let config = SimConfig {
            area: Area::new(Vec3::ZERO, Vec3::new(f32::NAN, 1.0, 1.0)),
            ..test_config(10)
        };
        let agents = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(Vec3::ZERO, Quat::IDENTITY)
            .build();
        let result = SimBuilder::new(config, agents).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn zero_threads_errors() {
        let config = SimConfig { num_threads: Some(0), ..test_config(10) };
        let agents = scattered(1, &config, AgentConfig::default());
        assert!(SimBuilder::new(config, agents).build().is_err());
    }

    #[test]
    fn invalid_agent_tuning_names_the_agent() {
        let config = test_config(10);
        let bad = AgentConfig { speed: f32::INFINITY, ..AgentConfig::default() };
        let agents = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(Vec3::ZERO, Quat::IDENTITY)
            .spawn_with(Vec3::X, Quat::IDENTITY, std::sync::Arc::new(bad))
            .build();
        match SimBuilder::new(config, agents).build() {
            Err(SimError::AgentConfig { agent, .. }) => assert_eq!(agent, AgentId(1)),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an AgentConfig error"),
        }
    }

    #[test]
    fn non_finite_spawn_pose_errors() {
        let config = test_config(10);
        let agents = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(Vec3::new(0.0, f32::NAN, 0.0), Quat::IDENTITY)
            .build();
        assert!(matches!(SimBuilder::new(config, agents).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn reach_beyond_moving_is_accepted() {
        let config = test_config(10);
        let odd = AgentConfig {
            stopping_moving_distance: 1.0,
            stopping_reach_distance:  2.0,
            ..AgentConfig::default()
        };
        let agents = scattered(2, &config, odd);
        assert!(SimBuilder::new(config, agents).build().is_ok());
    }
}

// ── Run loops and observer hooks ──────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_tick() {
        let config = test_config(10);
        let agents = scattered(5, &config, AgentConfig::default());
        let mut sim = SimBuilder::new(config, agents).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(sim.current_tick(), Tick(10));
        assert_eq!(rec.starts.len(), 10);
        assert_eq!(rec.ends.len(), 10);
        assert_eq!(rec.starts.first(), Some(&Tick(0)));
        assert_eq!(rec.ends.last().map(|s| s.tick), Some(Tick(9)));
        assert_eq!(rec.sim_end, Some(Tick(10)));
        assert!((sim.clock.elapsed_secs - 0.5).abs() < 1e-6);
    }

    #[test]
    fn run_is_a_noop_past_end_tick() {
        let config = test_config(3);
        let agents = scattered(2, &config, AgentConfig::default());
        let mut sim = SimBuilder::new(config, agents).build().unwrap();
        sim.run(&mut NoopObserver);
        let before = sim.agents.position.clone();

        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.starts.is_empty());
        assert_eq!(rec.sim_end, Some(Tick(3)));
        assert_eq!(sim.agents.position, before);
    }

    #[test]
    fn run_ticks_ignores_end_tick() {
        let config = test_config(5);
        let agents = scattered(2, &config, AgentConfig::default());
        let mut sim = SimBuilder::new(config, agents).build().unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(8, &mut rec);
        assert_eq!(sim.current_tick(), Tick(8));
        assert_eq!(rec.sim_end, None);
    }

    #[test]
    fn snapshots_follow_output_interval() {
        let config = SimConfig { output_interval_ticks: 3, ..test_config(10) };
        let agents = scattered(2, &config, AgentConfig::default());
        let mut sim = SimBuilder::new(config, agents).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(3), Tick(6), Tick(9)]);
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SimConfig { output_interval_ticks: 0, ..test_config(10) };
        let agents = scattered(2, &config, AgentConfig::default());
        let mut sim = SimBuilder::new(config, agents).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.snapshots.is_empty());
    }

    #[test]
    fn summary_counts_every_agent() {
        let config = test_config(50);
        let agents = scattered(20, &config, AgentConfig::default());
        let targets = scattered_targets(4, &config);
        let mut sim = SimBuilder::new(config, agents).targets(targets).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.ends.iter().all(|s| s.agent_count() == 20));
    }

    #[test]
    fn log_observer_runs_quietly() {
        let config = test_config(20);
        let agents = scattered(5, &config, eager());
        let targets = scattered_targets(2, &config);
        let mut sim = SimBuilder::new(config, agents).targets(targets).build().unwrap();
        sim.run(&mut LogObserver::new(5));
        assert_eq!(sim.current_tick(), Tick(20));
    }
}

// ── Host-driven stepping ──────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn one_second_step_moves_three_units() {
        let agents = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(Vec3::ZERO, Quat::IDENTITY)
            .build();
        let targets = TargetPool::from_positions([Vec3::new(10.0, 0.0, 0.0)]);
        let mut sim = SimBuilder::new(open_water(10), agents).targets(targets).build().unwrap();

        let summary = sim.step(1.0, &mut NoopObserver);

        assert!(approx(sim.agents.position[0], Vec3::new(3.0, 0.0, 0.0)));
        assert_eq!(sim.agents.movement[0], MovementState::Roaming);
        assert_eq!(sim.agents.target[0], Some(TargetId(0)));
        assert_eq!(summary.roaming, 1);
        assert_eq!(summary.claimed, 0);
    }

    #[test]
    fn bad_dt_advances_the_tick_but_nothing_moves() {
        let agents = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(Vec3::ZERO, Quat::IDENTITY)
            .build();
        let targets = TargetPool::from_positions([Vec3::new(10.0, 0.0, 0.0)]);
        let mut sim = SimBuilder::new(open_water(10), agents).targets(targets).build().unwrap();

        sim.step(-1.0, &mut NoopObserver);
        sim.step(f32::NAN, &mut NoopObserver);

        assert_eq!(sim.current_tick(), Tick(2));
        assert_eq!(sim.clock.elapsed_secs, 0.0);
        assert_eq!(sim.agents.position[0], Vec3::ZERO);
        assert_eq!(sim.agents.orientation[0], Quat::IDENTITY);
    }

    #[test]
    fn lone_agent_without_targets_keeps_swimming() {
        let agents = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(Vec3::ZERO, Quat::IDENTITY)
            .build();
        let mut sim = SimBuilder::new(open_water(10), agents).build().unwrap();

        sim.run_ticks(10, &mut NoopObserver);

        // 10 ticks × 0.05 s × 3 u/s along +Z.
        assert!(approx(sim.agents.position[0], Vec3::new(0.0, 0.0, 1.5)));
        assert_eq!(sim.agents.movement[0], MovementState::Roaming);
        assert_eq!(sim.agents.target[0], None);
    }
}

// ── Claims ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod claim_tests {
    use super::*;

    #[test]
    fn lower_id_wins_a_contested_target() {
        let agents = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(Vec3::new(0.3, 0.0, 0.0), Quat::IDENTITY)
            .spawn(Vec3::new(-0.3, 0.0, 0.0), Quat::IDENTITY)
            .build();
        let targets = TargetPool::from_positions([Vec3::ZERO]);
        let mut sim = SimBuilder::new(open_water(10), agents).targets(targets).build().unwrap();
        let mut rec = Recorder::default();

        sim.step(0.0, &mut rec);

        assert_eq!(
            rec.events,
            vec![(Tick(0), TargetEvent::Claimed { agent: AgentId(0), target: TargetId(0) })],
        );
        assert_eq!(sim.agents.movement[0], MovementState::Dwelling);
        assert_eq!(sim.agents.movement[1], MovementState::Roaming);
        assert_eq!(sim.agents.target[1], None);
        assert_eq!(sim.targets.is_available(TargetId(0)), Some(false));
    }

    #[test]
    fn release_after_dwell_time_then_reclaim() {
        let config = AgentConfig { time_at_interest_point: 1.0, ..AgentConfig::default() };
        let agents = AgentStoreBuilder::new(config)
            .spawn(Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY)
            .build();
        let targets = TargetPool::from_positions([Vec3::new(2.0, 0.0, 0.0)]);
        let mut sim = SimBuilder::new(open_water(10), agents).targets(targets).build().unwrap();
        let mut rec = Recorder::default();

        for _ in 0..6 {
            sim.step(0.25, &mut rec);
        }

        let claim = TargetEvent::Claimed { agent: AgentId(0), target: TargetId(0) };
        let release = TargetEvent::Released { agent: AgentId(0), target: TargetId(0) };
        assert_eq!(rec.events, vec![(Tick(0), claim), (Tick(4), release), (Tick(5), claim)]);
        assert_eq!(sim.agents.position[0], Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn ownership_rules_hold_over_a_long_run() {
        let config = SimConfig { output_interval_ticks: 1, ..test_config(2_000) };
        let area = config.area;
        let agents = scattered(12, &config, eager());
        let targets = scattered_targets(4, &config);
        let mut sim = SimBuilder::new(config, agents).targets(targets).build().unwrap();
        let mut audit = Audit::new(area);

        sim.run(&mut audit);

        assert!(audit.violations.is_empty(), "{:#?}", &audit.violations[..audit.violations.len().min(10)]);
        assert_eq!(audit.checked, 2_000);
        assert!(audit.claims > 0);
        assert!(audit.releases > 0);
    }
}

// ── Boundary ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boundary_tests {
    use super::*;

    #[test]
    fn default_school_stays_inside_the_area() {
        let config = SimConfig { output_interval_ticks: 1, dt_secs: 1.0 / 30.0, ..test_config(600) };
        let area = config.area;
        let agents = scattered(40, &config, AgentConfig::default());
        let targets = scattered_targets(6, &config);
        let mut sim = SimBuilder::new(config, agents).targets(targets).build().unwrap();
        let mut audit = Audit::new(area);

        sim.run(&mut audit);

        assert!(audit.violations.is_empty(), "{:#?}", &audit.violations[..audit.violations.len().min(10)]);
    }

    #[test]
    fn flat_area_pins_the_flat_axis() {
        let config = SimConfig {
            area: Area::new(Vec3::ZERO, Vec3::new(20.0, 0.0, 20.0)),
            ..test_config(200)
        };
        let agents = scattered(10, &config, AgentConfig::default());
        let mut sim = SimBuilder::new(config, agents).build().unwrap();

        sim.run(&mut NoopObserver);

        assert!(sim.agents.position.iter().all(|p| p.y == 0.0));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    fn build(config: &SimConfig) -> Sim {
        let agents = scattered(25, config, AgentConfig::default());
        let targets = scattered_targets(5, config);
        SimBuilder::new(config.clone(), agents).targets(targets).build().unwrap()
    }

    #[test]
    fn same_seed_same_trajectory() {
        let config = test_config(300);
        let mut a = build(&config);
        let mut b = build(&config);
        a.run(&mut NoopObserver);
        b.run(&mut NoopObserver);

        assert_eq!(a.agents.position, b.agents.position);
        assert_eq!(a.agents.orientation, b.agents.orientation);
        assert_eq!(a.agents.movement, b.agents.movement);
        assert_eq!(a.agents.target, b.agents.target);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = build(&test_config(50));
        let mut b = build(&SimConfig { seed: 7, ..test_config(50) });
        a.run(&mut NoopObserver);
        b.run(&mut NoopObserver);
        assert_ne!(a.agents.position, b.agents.position);
    }

    #[test]
    fn processing_order_does_not_change_forces() {
        // The same pair spawned in both orders: forces come from the
        // start-of-tick snapshot, so each fish follows the same path either way.
        let left = (Vec3::new(-1.0, 0.0, 0.0), Quat::IDENTITY);
        let right = (Vec3::new(1.0, 0.0, 0.0), Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));

        let forward = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(left.0, left.1)
            .spawn(right.0, right.1)
            .build();
        let reversed = AgentStoreBuilder::new(AgentConfig::default())
            .spawn(right.0, right.1)
            .spawn(left.0, left.1)
            .build();

        let mut a = SimBuilder::new(open_water(40), forward).build().unwrap();
        let mut b = SimBuilder::new(open_water(40), reversed).build().unwrap();
        a.run(&mut NoopObserver);
        b.run(&mut NoopObserver);

        assert!(approx(a.agents.position[0], b.agents.position[1]));
        assert!(approx(a.agents.position[1], b.agents.position[0]));
    }
}
