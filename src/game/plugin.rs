//! Game plugin: resources, messages, and the per-frame match schedule

use bevy::prelude::*;

use crate::core::{AppState, InMatch};
use crate::engine::{EngineConfig, UciEngine};
use crate::game::ai::{poll_analysis, spawn_analysis, AnalysisCoordinator};
use crate::game::config::MatchSetup;
use crate::game::events::{PromotionChosen, ResignRequested};
use crate::game::resources::{
    BoardState, MatchClock, MatchOutcome, MoveHistory, PendingPromotion, Selection,
};
use crate::game::system_sets::GameSystems;
use crate::game::systems::{
    detect_rules_outcome, handle_board_click, handle_resignation, resolve_promotion, tick_clock,
    transition_on_outcome,
};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MatchSetup>()
            .init_resource::<BoardState>()
            .init_resource::<MatchClock>()
            .init_resource::<Selection>()
            .init_resource::<MoveHistory>()
            .init_resource::<PendingPromotion>()
            .init_resource::<MatchOutcome>()
            .add_message::<PromotionChosen>()
            .add_message::<ResignRequested>()
            .configure_sets(
                Update,
                (
                    GameSystems::Input,
                    GameSystems::Analysis,
                    GameSystems::Clock,
                    GameSystems::Outcome,
                    GameSystems::Visual,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                (
                    GameSystems::Input,
                    GameSystems::Analysis,
                    GameSystems::Clock,
                    GameSystems::Outcome,
                )
                    .run_if(in_state(AppState::InGame)),
            )
            // Visual stays live through the end screen so the final
            // position keeps rendering under the result overlay.
            .configure_sets(
                Update,
                GameSystems::Visual.run_if(in_state(InMatch)),
            )
            .add_systems(Startup, init_engine)
            .add_systems(OnEnter(AppState::InGame), start_match)
            .add_systems(
                Update,
                (
                    (handle_board_click, resolve_promotion)
                        .chain()
                        .in_set(GameSystems::Input),
                    (spawn_analysis, poll_analysis)
                        .chain()
                        .in_set(GameSystems::Analysis),
                    tick_clock.in_set(GameSystems::Clock),
                    (
                        detect_rules_outcome,
                        handle_resignation,
                        transition_on_outcome,
                    )
                        .chain()
                        .in_set(GameSystems::Outcome),
                ),
            );
    }
}

/// Spawn the engine subprocess once, at startup. A missing or broken
/// binary degrades the coordinator, not the application.
fn init_engine(mut commands: Commands) {
    let engine = UciEngine::spawn(&EngineConfig::default());
    commands.insert_resource(AnalysisCoordinator::new(engine));
}

/// Reset every match resource for a fresh game
fn start_match(
    setup: Res<MatchSetup>,
    mut coordinator: ResMut<AnalysisCoordinator>,
    mut board: ResMut<BoardState>,
    mut clock: ResMut<MatchClock>,
    mut selection: ResMut<Selection>,
    mut history: ResMut<MoveHistory>,
    mut pending: ResMut<PendingPromotion>,
    mut outcome: ResMut<MatchOutcome>,
) {
    coordinator.abandon();
    *board = BoardState::default();
    *clock = MatchClock::start(setup.time_control);
    selection.clear();
    *history = MoveHistory::default();
    pending.clear();
    *outcome = MatchOutcome::default();
    info!(
        "[GAME] match started, mode {:?}, human plays {:?}",
        setup.mode, setup.human_color
    );
}
