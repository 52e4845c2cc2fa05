use common::*;
use simulation::{AgentDescriptor, Role, TerminationReason, World, WorldState};

fn chaser(x: F, y: F) -> AgentDescriptor {
    AgentDescriptor::new(Role::Chaser, dvec2(x, y))
}

#[test]
fn chaser_seeks_evader() {
    logging::for_tests();

    let agents = [
        chaser(0.0, 0.0),
        AgentDescriptor::new(Role::Evader, dvec2(3.0, 0.0)),
    ];
    let mut world = World::new(10.0, 10.0, 0.02, agents).unwrap();

    assert_eq!(world.step(), WorldState::Running);

    let chaser = world.chaser().unwrap();
    assert_eq!(chaser.velocity(), dvec2(1.0, 0.0));
    assert!(chaser.position().x.approx_eq(0.02, (F::EPSILON, 2)));
    assert_eq!(chaser.position().y, 0.0);
}

#[test]
fn evader_pushed_off_wall() {
    let agents = [
        AgentDescriptor::new(Role::Evader, dvec2(4.999, 0.0)),
        chaser(-4.0, -4.0),
    ];
    let mut world = World::new(10.0, 10.0, 0.02, agents).unwrap();

    assert_eq!(world.step(), WorldState::Running);

    let vel = world.quarry().velocity();
    assert!(vel.x < 0.0, "{:?}", vel);
    assert!(vel.length().approx_eq(1.0, (1e-12, 4)));
}

#[test]
fn caught_on_exact_step() {
    // a runner keeps its velocity, so the capture tick is exact. A fleeing evader's path depends
    // on the repulsion, see evader_cornered_by_wall
    // runner heads straight at the chaser, closing 0.04 per step from 0.47 apart
    let agents = [
        chaser(0.0, 0.0),
        AgentDescriptor::new(Role::Runner, dvec2(0.47, 0.0)).with_velocity(dvec2(-1.0, 0.0)),
    ];
    let mut world = World::new(10.0, 10.0, 0.02, agents).unwrap();

    assert_eq!(world.step(), WorldState::Running);
    let gap = world.quarry().separation(world.chaser().unwrap());
    assert!(gap > 0.4, "{}", gap);

    assert_eq!(
        world.step(),
        WorldState::Terminated(TerminationReason::Caught)
    );
    assert_eq!(world.tick(), 2);
}

#[test]
fn evader_cornered_by_wall() {
    // sqrt(h) is the wall term's singularity, where it outweighs the chaser diagonally behind
    let x = 5.0_f64.sqrt();
    let agents = [
        AgentDescriptor::new(Role::Evader, dvec2(x, 0.0)),
        chaser(x - 0.3, 0.3),
    ];
    let mut world = World::new(10.0, 10.0, 0.02, agents).unwrap();
    assert!(world.quarry().separation(world.chaser().unwrap()) > 0.4);

    // thrown back towards the chaser: separation drops from 0.42 to 0.39
    assert_eq!(
        world.step(),
        WorldState::Terminated(TerminationReason::Caught)
    );
    assert_eq!(world.tick(), 1);

    let vel = world.quarry().velocity();
    assert!(vel.x.approx_eq(-1.0, (1e-9, 4)), "{:?}", vel);
    assert!(vel.y.abs() < 1e-6, "{:?}", vel);
}

#[test]
fn touching_is_not_caught() {
    // all values exactly representable: separation goes 0.75, 0.5 (== radius sum), 0.25
    let agents = [
        chaser(0.0, 0.0).with_radius(0.25),
        AgentDescriptor::new(Role::Runner, dvec2(1.0, 0.0))
            .with_velocity(dvec2(-1.0, 0.0))
            .with_radius(0.25),
    ];
    let mut world = World::new(10.0, 10.0, 0.125, agents).unwrap();

    assert_eq!(world.step(), WorldState::Running);
    assert_eq!(world.step(), WorldState::Running);
    assert_eq!(world.quarry().separation(world.chaser().unwrap()), 0.5);

    assert_eq!(
        world.step(),
        WorldState::Terminated(TerminationReason::Caught)
    );
}

#[test]
fn runner_leaves_before_capture() {
    let agents = [
        AgentDescriptor::new(Role::Runner, dvec2(4.0, 0.0)).with_velocity(dvec2(1.0, 0.0)),
        chaser(-4.0, -4.0),
    ];
    let mut world = World::new(10.0, 10.0, 0.02, agents).unwrap();

    let state = (0..1000)
        .map(|_| world.step())
        .find(|state| *state != WorldState::Running);

    assert_eq!(
        state,
        Some(WorldState::Terminated(TerminationReason::OutOfBounds))
    );
    assert!(world.quarry().position().x > 5.0);
    assert!(world.tick() <= 51, "took {} ticks", world.tick());
}

#[test]
fn long_chase_stays_well_defined() {
    let mut world = World::default();

    for _ in 0..5000 {
        let state = world.step();

        for agent in world.agents() {
            let pos = agent.position();
            assert!(pos.x.is_finite() && pos.y.is_finite(), "{:?}", agent);
            assert!(
                agent.velocity().length().approx_eq(1.0, (1e-9, 4)),
                "{:?}",
                agent
            );
        }

        if state != WorldState::Running {
            break;
        }
    }
}
