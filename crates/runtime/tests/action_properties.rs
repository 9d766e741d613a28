use std::cell::RefCell;
use std::rc::Rc;

use wumpus_core::{
    Action, EntitySpec, EventKind, GameConfig, GameState, Heading, ItemKind, MapDimensions,
    Percept, Position, PropKind,
};
use wumpus_runtime::{FnProgram, IdleProgram, ScriptedProgram, Simulation};

fn walled(size: u32) -> Simulation {
    Simulation::new(
        GameState::with_walls(MapDimensions::new(size, size)),
        GameConfig::default().with_dimensions(MapDimensions::new(size, size)),
    )
}

/// Program that records every percept it receives before replaying a script.
fn recorder(
    name: &'static str,
    script: Vec<Action>,
) -> (FnProgram<impl FnMut(&Percept) -> Action>, Rc<RefCell<Vec<Percept>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let mut script = script.into_iter();
    let program = FnProgram::new(name, move |percept: &Percept| {
        log.borrow_mut().push(*percept);
        script.next().unwrap_or(Action::NoOp)
    });
    (program, seen)
}

#[test]
fn forward_into_wall_bumps_without_cost() {
    let mut sim = walled(4);
    let (program, seen) = recorder("Bumper", vec![Action::Forward, Action::NoOp, Action::NoOp]);
    let id = sim.add_agent(program, Position::new(1, 1), Heading::South).unwrap();

    let tick = sim.step().unwrap();
    assert_eq!(tick.score, 0);
    assert_eq!(tick.events[0].kind, EventKind::HitWall);

    let agent = sim.state().entities.agent(id).unwrap();
    assert_eq!(agent.position, Position::new(1, 1));
    assert!(agent.bump);

    sim.step().unwrap();
    sim.step().unwrap();
    let seen = seen.borrow();
    assert!(!seen[0].bump);
    assert!(seen[1].bump, "bump is reported on the tick after the attempt");
    assert!(!seen[2].bump, "and only on that tick");
}

#[test]
fn forward_into_wumpus_kills_and_removes_agent() {
    let mut sim = walled(5);
    sim.add_entity(EntitySpec::Wumpus, Position::new(2, 1)).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let counter = calls.clone();
    let id = sim
        .add_agent(
            FnProgram::new("Victim", move |_: &Percept| {
                *counter.borrow_mut() += 1;
                Action::Forward
            }),
            Position::new(1, 1),
            Heading::East,
        )
        .unwrap();

    let tick = sim.step().unwrap();
    assert!(tick.done);
    assert_eq!(tick.score, -1000);
    assert_eq!(
        tick.events[0].kind,
        EventKind::Died {
            cause: PropKind::Wumpus,
            penalty: 1000
        }
    );
    assert_eq!(
        tick.events[0].to_string(),
        " #000: Victim meets Wumpus and dies(-1000 points)"
    );
    assert!(sim.state().entities.agent(id).is_none());
    assert!(sim.is_done());

    let summary = sim.run(10).unwrap();
    assert_eq!(summary.ticks, 0);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(sim.state().world.score, -1000);
}

#[test]
fn grab_credits_gold_and_fills_held_slot() {
    let mut sim = walled(4);
    sim.add_entity(EntitySpec::Gold, Position::new(1, 1)).unwrap();
    let (program, seen) = recorder("Miner", vec![Action::Grab, Action::Grab]);
    let id = sim.add_agent(program, Position::new(1, 1), Heading::East).unwrap();

    let tick = sim.step().unwrap();
    assert_eq!(tick.score, 1000);
    assert_eq!(tick.events[0].to_string(), " #000: Miner grabbed the Gold(+1000 points)");
    assert!(sim.state().entities.find_at(PropKind::Gold, Position::new(1, 1)).is_none());
    assert_eq!(sim.state().entities.agent(id).unwrap().holding, Some(ItemKind::Gold));

    let second = sim.step().unwrap();
    assert_eq!(second.score, 1000, "grabbing an empty cell changes nothing");
    assert!(second.events.is_empty());
    assert!(seen.borrow()[0].glitter);
    assert!(!seen.borrow()[1].glitter);
}

#[test]
fn release_consumes_the_held_item() {
    let mut sim = walled(4);
    sim.add_entity(EntitySpec::Gold, Position::new(1, 1)).unwrap();
    let id = sim
        .add_agent(
            ScriptedProgram::new("Miner", [Action::Grab, Action::Release]),
            Position::new(1, 1),
            Heading::East,
        )
        .unwrap();

    sim.run(2).unwrap();

    assert_eq!(sim.state().entities.agent(id).unwrap().holding, None);
    assert!(sim.state().entities.props_at(Position::new(1, 1)).next().is_none());
    assert_eq!(sim.state().world.score, 1000);
}

#[test]
fn shot_costs_ten_and_scream_lasts_one_percept() {
    let mut sim = walled(10);
    sim.add_entity(EntitySpec::Wumpus, Position::new(1, 8)).unwrap();
    let (program, seen) = recorder(
        "Archer",
        vec![Action::Shoot, Action::Shoot, Action::NoOp, Action::NoOp],
    );
    sim.add_agent(program, Position::new(1, 1), Heading::North).unwrap();

    let first = sim.step().unwrap();
    assert_eq!(first.score, -10);
    let kinds: Vec<_> = first.events.iter().map(|event| event.kind).collect();
    assert_eq!(kinds, vec![EventKind::ShotArrow { cost: 10 }, EventKind::KilledWumpus]);
    assert!(sim.state().entities.find_at(PropKind::Wumpus, Position::new(1, 8)).is_none());

    let second = sim.step().unwrap();
    assert_eq!(second.score, -20, "a miss costs the same");
    assert_eq!(second.events.len(), 1);

    sim.step().unwrap();
    sim.step().unwrap();
    let seen = seen.borrow();
    assert!(!seen[0].scream);
    assert!(seen[1].scream);
    assert!(!seen[2].scream);
    assert!(!seen[3].scream);
}

#[test]
fn limited_quiver_stops_charging_when_empty() {
    let dims = MapDimensions::new(6, 6);
    let config = GameConfig::default()
        .with_dimensions(dims)
        .with_arrows_per_agent(Some(1));
    let mut state = GameState::with_walls(dims);
    state.set_arrows_per_agent(config.arrows_per_agent);
    let mut sim = Simulation::new(state, config);
    let id = sim
        .add_agent(
            ScriptedProgram::new("Archer", [Action::Shoot, Action::Shoot]),
            Position::new(1, 1),
            Heading::East,
        )
        .unwrap();

    sim.run(2).unwrap();

    assert_eq!(sim.state().world.score, -10);
    assert_eq!(sim.state().entities.agent(id).unwrap().arrows, Some(0));
}

#[test]
fn percepts_come_from_the_pre_tick_world() {
    let mut sim = walled(6);
    sim.add_entity(EntitySpec::Gold, Position::new(2, 1)).unwrap();
    sim.add_agent(
        ScriptedProgram::new("Mover", [Action::Forward, Action::Grab]),
        Position::new(1, 1),
        Heading::East,
    )
    .unwrap();
    let (watcher, seen) = recorder("Watcher", Vec::new());
    sim.add_agent(watcher, Position::new(2, 1), Heading::North).unwrap();

    // Mover enters the gold cell this tick, but both percepts were taken
    // before it acted.
    let first = sim.step().unwrap();
    assert_eq!(first.executions.len(), 2);
    assert_eq!(first.executions[0].action, Action::Forward);
    assert!(seen.borrow()[0].glitter);

    let second = sim.step().unwrap();
    assert_eq!(second.score, -1 + 1000);
    assert!(seen.borrow()[1].glitter, "gold still visible before Mover grabs");

    sim.step().unwrap();
    assert!(!seen.borrow()[2].glitter);
}

#[test]
fn roster_order_decides_who_grabs_first() {
    let mut sim = walled(5);
    sim.add_entity(EntitySpec::Gold, Position::new(2, 2)).unwrap();
    let late = sim
        .add_agent(
            ScriptedProgram::new("Late", [Action::Grab]),
            Position::new(2, 2),
            Heading::East,
        )
        .unwrap();
    let early_program = ScriptedProgram::new("Also", [Action::Grab]);
    let also = sim.add_agent(early_program, Position::new(2, 2), Heading::West).unwrap();
    sim.add_agent(IdleProgram::new("Idle"), Position::new(3, 3), Heading::East)
        .unwrap();

    sim.step().unwrap();

    assert_eq!(sim.state().entities.agent(late).unwrap().holding, Some(ItemKind::Gold));
    assert_eq!(sim.state().entities.agent(also).unwrap().holding, None);
    assert_eq!(sim.action_trace().len(), 3);
    assert_eq!(sim.action_trace()[0].actor, late);
}
