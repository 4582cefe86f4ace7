use minilab::prelude::*;
use minilab::qlearning::{act, choose_action, AgentStep, REWARD_HISTORY_LEN};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;


// The example world (S: start, G: goal, #: obstacle)
//
//     0 1 2 3 4
//  0  S . . . .
//  1  . # . # .
//  2  . . # . .
//  3  . . . . .
//  4  . . . . G


#[test]
fn rewards_of_the_example_world() {
    let world = GridWorld::example();
    assert_eq!(world.width(), 5);
    assert_eq!(world.start(), Cell::new(0, 0));
    assert_eq!(world.goal(), Cell::new(4, 4));
    assert!(world.is_obstacle(Cell::new(1, 1)));
    assert!(world.is_obstacle(Cell::new(3, 1)));
    assert!(world.is_obstacle(Cell::new(2, 2)));

    let bump = world.step(Cell::new(2, 1), Action::Down);
    assert_eq!((bump.next, bump.reward), (Cell::new(2, 1), -100.0));

    let walk = world.step(Cell::new(2, 1), Action::Up);
    assert_eq!((walk.next, walk.reward), (Cell::new(2, 0), -1.0));

    let goal = world.step(Cell::new(3, 4), Action::Right);
    assert_eq!((goal.next, goal.reward, goal.done), (Cell::new(4, 4), 100.0, true));
}


#[test]
fn custom_rewards() {
    let world = GridWorld::example()
        .rewards(Rewards { goal: 1.0, collision: -10.0, step: 0.0 });
    let bump = world.step(Cell::new(0, 0), Action::Left);
    assert_eq!(bump.reward, -10.0);
}


#[test]
fn train_episode_updates_the_table_in_place() {
    let world = GridWorld::example();
    let mut table = QTable::for_world(&world);
    let params = QLearningParams::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let report = train_episode(&mut table, &world, &params, &mut rng)
        .unwrap();
    assert!(report.steps_taken >= 1 && report.steps_taken <= params.max_steps);
    assert_ne!(table, QTable::for_world(&world));
    assert_eq!(report.epsilon, 1.0);
    assert_eq!(report.next_epsilon, 0.995);
}


#[test]
fn train_episode_rejects_a_table_of_another_grid() {
    let world = GridWorld::example();
    let params = QLearningParams::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    // 2 x 2 table, 5 x 5 world
    let mut table = QTable::new(2, 2);
    let result = train_episode(&mut table, &world, &params, &mut rng);
    assert!(matches!(result, Err(MiniLabError::InvalidArgument(_))));
    assert_eq!(table, QTable::new(2, 2));

    // Same number of cells, different width
    let mut table = QTable::new(25, 1);
    assert!(train_episode(&mut table, &world, &params, &mut rng).is_err());
}


#[test]
fn train_episode_rejects_malformed_hyperparameters() {
    let world = GridWorld::example();
    let mut table = QTable::for_world(&world);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let malformed = [
        QLearningParams { alpha: -3.0, ..Default::default() },
        QLearningParams { alpha: 0.0, ..Default::default() },
        QLearningParams { gamma: 7.0, ..Default::default() },
        QLearningParams { gamma: 1.0, ..Default::default() },
        QLearningParams { epsilon: 5.0, ..Default::default() },
        QLearningParams { epsilon_decay: 0.0, ..Default::default() },
        QLearningParams { max_steps: 0, ..Default::default() },
    ];
    for params in malformed {
        let result = train_episode(&mut table, &world, &params, &mut rng);
        assert!(
            matches!(result, Err(MiniLabError::InvalidArgument(_))),
            "{params:?} was accepted"
        );
    }
    // Nothing was learned from the rejected calls.
    assert_eq!(table, QTable::for_world(&world));
}


#[test]
fn act_and_choose_action_check_their_inputs() {
    let world = GridWorld::example();
    let mut table = QTable::for_world(&world);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let params = QLearningParams { alpha: 1.5, ..Default::default() };
    assert!(act(&mut table, &world, world.start(), &params, &mut rng).is_err());

    let mut small = QTable::new(2, 2);
    let params = QLearningParams::default();
    assert!(act(&mut small, &world, world.start(), &params, &mut rng).is_err());

    assert!(choose_action(&table, world.start(), -0.1, &mut rng).is_err());
    assert!(choose_action(&table, Cell::new(0, 5), 0.5, &mut rng).is_err());

    let params = QLearningParams { epsilon: 0.0, ..Default::default() };
    let (action, transition) = act(
        &mut table, &world, world.start(), &params, &mut rng
    ).unwrap();
    assert_eq!(action, Action::Up);
    assert_eq!(transition.next, world.start());
}


#[test]
fn epsilon_decays_to_its_floor() {
    let params = QLearningParams { epsilon_decay: 0.5, ..Default::default() };
    let mut session = QLearningSession::new(GridWorld::example(), params)
        .unwrap()
        .seed(1);
    session.train(20);
    assert_eq!(session.epsilon(), 0.01);
}


#[test]
fn learns_a_path_to_the_goal() {
    let mut session = QLearningSession::new(
        GridWorld::example(), QLearningParams::default()
    ).unwrap().seed(2024);
    session.train(1_000);

    // Follow the greedy policy from the start.
    let world = session.world().clone();
    let mut cell = world.start();
    let mut reached = false;
    for _ in 0..world.n_cells() {
        let action = session.table().best_action(cell);
        let t = world.step(cell, action);
        cell = t.next;
        if t.done {
            reached = true;
            break;
        }
    }
    assert!(reached, "the greedy policy does not reach the goal");
    assert!(session.average_reward().unwrap() > 0.0);
    assert_eq!(session.reward_history().count(), REWARD_HISTORY_LEN);
}


#[test]
fn stepwise_training_finishes_episodes() {
    let params = QLearningParams { max_steps: 3, ..Default::default() };
    let mut session = QLearningSession::new(GridWorld::example(), params)
        .unwrap()
        .seed(9);

    let steps = (0..3).map(|_| session.step()).collect::<Vec<AgentStep>>();
    assert!(steps[..2].iter().all(|s| s.episode.is_none()));
    let report = steps[2].episode.expect("the step budget is 3");
    assert_eq!(report.steps_taken, 3);
    assert!(!report.reached_goal);
    assert_eq!(session.episode(), 1);
    assert_eq!(session.agent(), Cell::new(0, 0));
}


#[test]
fn params_from_json() {
    let params = QLearningParams::from_json(
        r#"{ "alpha": 0.5, "gamma": 0.8, "epsilon": 0.2 }"#
    ).unwrap();
    assert_eq!(params.alpha, 0.5);
    assert_eq!(params.max_steps, 50);

    let err = QLearningParams::from_json(r#"{ "gamma": 1.0 }"#).unwrap_err();
    assert!(matches!(err, MiniLabError::InvalidArgument(_)));
}
