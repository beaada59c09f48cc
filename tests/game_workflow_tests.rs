use std::io::Cursor;

use party_trivia::{
    Answer, CsvQuestionRepository, Game, Question, QuestionError, QuestionFilter, QuestionStore,
    TextUi,
};
use rstest::rstest;

mod utils;

use utils::*;

/// Draws a question and answers it the way `correct` says
fn play_round(game: &mut Game, correct: bool) -> party_trivia::RoundOutcome {
    let question = game
        .draw()
        .expect("draw should succeed")
        .expect("pool should not be empty")
        .clone();
    let right = question.correct_answer.unwrap_or(true);
    let answer = Answer::from(if correct { right } else { !right });
    game.submit(answer).expect("submit should succeed")
}

fn used_rows(csv: &str) -> usize {
    csv.lines().filter(|line| line.contains(",True,")).count()
}

#[test]
fn test_full_game_persists_used_flags_to_file() {
    let (mut game, file) = GameBuilder::new()
        .with_standard_deck()
        .with_three_players()
        .with_rounds(4)
        .build_with_file();

    for _ in 0..4 {
        play_round(&mut game, true);
    }

    assert!(game.is_over());
    assert_eq!(game.session().round, 4);
    assert_eq!(used_rows(&file.read()), 4);

    let reopened = QuestionStore::open(CsvQuestionRepository::new(file.path())).unwrap();
    assert_eq!(reopened.total_count(), 10);
    assert_eq!(reopened.unused_count(), 6);
}

#[test]
fn test_third_strike_makes_player_drink() {
    let mut game = GameBuilder::new()
        .with_standard_deck()
        .with_players(&["alice", "bob"])
        .with_rounds(6)
        .build();

    let mut alice_outcomes = vec![];
    for round in 0..6 {
        // alice always right, bob always wrong
        let outcome = play_round(&mut game, round % 2 == 0);
        if outcome.player_name == "alice" {
            alice_outcomes.push(outcome);
        }
    }

    let drank: Vec<bool> = alice_outcomes.iter().map(|o| o.effect.drank).collect();
    assert_eq!(drank, vec![false, false, true]);

    let alice = game.tracker().get("alice").unwrap();
    assert_eq!(alice.strikes, 0);
    assert_eq!(alice.drinks, 1);
    assert_eq!(alice.score, 30);

    let bob = game.tracker().get("bob").unwrap();
    assert_eq!(bob.drinks, 0);
    assert_eq!(bob.incorrect, 3);
    assert_eq!(bob.accuracy(), 0.0);

    let results = game.final_results();
    assert_eq!(results.winner.as_deref(), Some("bob"));
    assert_eq!(results.loser.as_deref(), Some("alice"));
    assert_eq!(results.total_rounds, 6);

    let leaders: Vec<&str> = game.leaderboard(2).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(leaders, vec!["alice", "bob"]);
}

#[rstest]
#[case(1, vec![2, 4, 6, 8, 10])]
#[case(2, vec![1, 3, 5, 7, 9])]
fn test_category_filter_limits_draws(#[case] category: u32, #[case] expected: Vec<u32>) {
    let mut game = GameBuilder::new()
        .with_standard_deck()
        .with_players(&["alice", "bob"])
        .with_filter(QuestionFilter::default().category(category))
        .build();

    let mut drawn = vec![];
    loop {
        let Some(id) = game.draw().unwrap().map(|q| q.id) else {
            break;
        };
        drawn.push(id);
        game.submit(Answer::Yes).unwrap();
    }
    drawn.sort_unstable();

    assert_eq!(drawn, expected);
    assert!(game.current_question().is_none());
}

#[test]
fn test_new_game_resets_rounds_and_keeps_players() {
    let mut game = GameBuilder::new()
        .with_standard_deck()
        .with_three_players()
        .build();

    play_round(&mut game, true);
    play_round(&mut game, false);
    assert_eq!(game.session().history.len(), 2);

    game.start(5).unwrap();

    assert_eq!(game.session().round, 0);
    assert!(game.session().history.is_empty());
    assert_eq!(game.session().max_rounds, 5);
    assert_eq!(game.tracker().len(), 3);
    assert_eq!(game.current_player().unwrap().name, "alice");
}

#[test]
fn test_registering_again_resets_question_pool() {
    let mut game = GameBuilder::new()
        .with_standard_deck()
        .with_players(&["alice", "bob"])
        .build();

    play_round(&mut game, true);
    play_round(&mut game, true);
    assert_eq!(game.store().unused_count(), 8);

    game.register_players(&["carol", "dave"]).unwrap();

    assert_eq!(game.store().unused_count(), 10);
    assert!(game.tracker().get("alice").is_none());
}

#[test]
fn test_block_card_passes_question_back_without_moving_turn() {
    let mut game = GameBuilder::new()
        .with_standard_deck()
        .with_three_players()
        .build();

    game.draw().unwrap();
    let target = game.use_block_card().unwrap();
    assert_eq!(target, "carol");

    let outcome = game.submit(Answer::Yes).unwrap();
    assert_eq!(outcome.player_name, "carol");
    assert_eq!(game.current_player().unwrap().name, "bob");
    assert!(!game.tracker().get("alice").unwrap().has_block_card);
}

#[test]
fn test_text_ui_plays_a_game_against_a_csv_file() {
    let (game, file) = GameBuilder::new().with_standard_deck().build_with_file();
    let input = Cursor::new("2\nalice\nbob\nyes\nno\ny\n");
    let mut output = Vec::new();

    let game = TextUi::new(game, input, &mut output, 3).run().unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Players: alice, bob"));
    assert!(text.contains("GAME OVER after 3 rounds"));
    assert!(text.contains("Winner: "));
    assert_eq!(game.session().round, 3);
    assert!(!game.session().active);
    assert_eq!(used_rows(&file.read()), 3);
}

#[test]
fn test_text_ui_quit_clocks_out_and_ends_two_player_game() {
    let (game, file) = GameBuilder::new().with_standard_deck().build_with_file();
    let input = Cursor::new("2\nalice\nbob\nquit\n");
    let mut output = Vec::new();

    let game = TextUi::new(game, input, &mut output, 10).run().unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("alice clocked out after 0 drinks. Bye!"));
    assert!(text.contains("GAME OVER after 0 rounds"));
    assert!(text.contains("alice (out)"));
    assert!(!game.tracker().get("alice").unwrap().active);
    assert_eq!(used_rows(&file.read()), 1);
}

#[test]
fn test_questions_with_commas_and_quotes_survive_a_game() {
    let tricky = vec![
        Question::new(1, "Is Paris, France a capital?", 1, 1).with_answer(true),
        Question::new(2, "Is \"moon\" a planet?", 1, 1).with_answer(false),
    ];
    let (mut game, file) = GameBuilder::new()
        .with_questions(tricky.clone())
        .with_players(&["alice", "bob"])
        .build_with_file();

    play_round(&mut game, true);
    play_round(&mut game, true);

    let reopened = QuestionStore::open(CsvQuestionRepository::new(file.path())).unwrap();
    let texts: Vec<&str> = reopened.all().iter().map(|q| q.question.as_str()).collect();
    assert_eq!(texts, vec![tricky[0].question.as_str(), tricky[1].question.as_str()]);
    assert_eq!(reopened.unused_count(), 0);
}

#[test]
fn test_malformed_file_fails_to_open() {
    let file = TempQuestionFile::with_contents(
        "id,question,category,difficulty,used,correct_answer\n1,Q?,one,1,False,Yes\n",
    );

    let err = QuestionStore::open(CsvQuestionRepository::new(file.path())).unwrap_err();

    assert!(matches!(err, QuestionError::Csv(_)));
}
