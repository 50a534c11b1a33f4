//! Property-based tests for rounds and history.
//!
//! These tests use proptest to check that guessing, outcome and history rules
//! hold across many randomly generated words and guess sequences.

use hangman::core::{GuessState, MAX_INCORRECT, Outcome, Word};
use hangman::game::{GameController, Phase};
use hangman::history::{GameResult, HistoryEntry, HistoryStore, MemoryStore};
use hangman::wordlists::WordPool;
use proptest::prelude::*;
use proptest::sample::subsequence;

const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

prop_compose! {
    /// Words of up to 12 letters drawn from at most 16 distinct letters, so at
    /// least 10 letters are always left over as misses
    fn arbitrary_word()(letters in subsequence(ALPHABET.to_vec(), 1..=16))
        (word in prop::collection::vec(prop::sample::select(letters), 1..=12))
        -> Word
    {
        Word::new(word.into_iter().collect::<String>()).unwrap()
    }
}

fn misses_for(word: &Word) -> Vec<char> {
    ALPHABET.iter().copied().filter(|&c| !word.has_letter(c)).collect()
}

fn distinct_letters(word: &Word) -> Vec<char> {
    let mut letters: Vec<char> = Vec::new();
    for c in word.chars() {
        if !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}

fn controller_for(word: &Word) -> GameController<MemoryStore> {
    let pool = WordPool::new(vec![word.clone()]).unwrap();
    GameController::new(pool, HistoryStore::new(MemoryStore::new()))
}

proptest! {
    #[test]
    fn ten_distinct_misses_lose(word in arbitrary_word(), seed in any::<u64>()) {
        let mut misses = misses_for(&word);
        prop_assume!(misses.len() >= MAX_INCORRECT);
        // Rotate to vary which misses are used
        let len = misses.len();
        misses.rotate_left((seed as usize) % len);

        let mut state = GuessState::new(word);
        for &c in misses.iter().take(MAX_INCORRECT) {
            prop_assert!(state.submit_letter(c));
        }

        prop_assert!(state.is_lost());
        prop_assert_eq!(state.outcome(), Outcome::Lost);
        prop_assert_eq!(state.incorrect_letters(), misses[..MAX_INCORRECT].to_vec());
    }

    #[test]
    fn all_letters_in_any_order_win(
        word in arbitrary_word(),
        order in any::<u64>(),
    ) {
        let mut letters = distinct_letters(&word);
        // Shuffle driven by the generated value
        let len = letters.len();
        for i in (1..len).rev() {
            let j = (order as usize).wrapping_mul(i + 7) % (i + 1);
            letters.swap(i, j);
        }

        let mut state = GuessState::new(word);
        for c in letters {
            state.submit_letter(c.to_ascii_lowercase());
        }

        prop_assert!(state.is_won());
        prop_assert_eq!(state.outcome(), Outcome::Won);
        prop_assert!(state.incorrect_letters().is_empty());
    }

    #[test]
    fn guesses_after_terminal_outcome_change_nothing(
        word in arbitrary_word(),
        win in any::<bool>(),
        extra in prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 1..20),
    ) {
        let mut state = GuessState::new(word.clone());
        let finishing = if win {
            distinct_letters(&word)
        } else {
            misses_for(&word).into_iter().take(MAX_INCORRECT).collect()
        };
        for c in finishing {
            state.submit_letter(c);
        }
        prop_assert!(state.outcome().is_terminal());

        let guessed = state.guessed().to_vec();
        let outcome = state.outcome();
        for c in extra {
            prop_assert!(!state.submit_letter(c));
        }
        prop_assert_eq!(state.guessed(), guessed.as_slice());
        prop_assert_eq!(state.outcome(), outcome);
    }

    #[test]
    fn guess_set_never_has_duplicates(
        word in arbitrary_word(),
        guesses in prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..40),
    ) {
        let mut state = GuessState::new(word);
        for c in guesses {
            state.submit_letter(c);
        }
        let guessed = state.guessed();
        for (i, c) in guessed.iter().enumerate() {
            prop_assert!(!guessed[i + 1..].contains(c));
        }
        prop_assert!(state.incorrect_letters().len() <= MAX_INCORRECT);
    }

    #[test]
    fn append_then_load_ends_with_entry(
        words in prop::collection::vec("[A-Z]{1,10}", 1..8),
        date in "[0-9/: ]{0,20}",
    ) {
        let mut store = HistoryStore::new(MemoryStore::new());
        for (i, word) in words.iter().enumerate() {
            let result = if i % 2 == 0 { GameResult::Won } else { GameResult::Lost };
            let entry = HistoryEntry::new(word.clone(), date.clone(), result);
            store.append(entry.clone()).unwrap();

            let loaded = store.load();
            prop_assert_eq!(loaded.len(), i + 1);
            prop_assert_eq!(loaded.last(), Some(&entry));
        }

        store.clear().unwrap();
        prop_assert!(store.load().is_empty());
    }

    #[test]
    fn finished_round_records_exactly_once(
        word in arbitrary_word(),
        win in any::<bool>(),
        extra in prop::collection::vec("[a-zA-Z0-9]{0,2}", 0..10),
    ) {
        let mut game = controller_for(&word);
        let finishing = if win {
            distinct_letters(&word)
        } else {
            misses_for(&word).into_iter().take(MAX_INCORRECT).collect()
        };
        for c in finishing {
            game.handle_letter_input(&c.to_string());
        }
        for raw in &extra {
            game.handle_letter_input(raw);
            let _ = game.view();
        }

        let view = game.view();
        prop_assert_eq!(view.phase, Phase::RoundOver);
        prop_assert_eq!(view.history.len(), 1);
        let expected = if win { GameResult::Won } else { GameResult::Lost };
        prop_assert_eq!(view.history[0].result, expected);
        prop_assert_eq!(&view.history[0].word, word.text());
    }
}

#[test]
fn gato_scenario_win() {
    let mut state = GuessState::new(Word::new("GATO").unwrap());
    for c in ['G', 'A', 'T', 'O'] {
        state.submit_letter(c);
    }
    assert_eq!(state.outcome(), Outcome::Won);
    assert!(state.incorrect_letters().is_empty());
}

#[test]
fn gato_scenario_loss() {
    let mut state = GuessState::new(Word::new("GATO").unwrap());
    let wrong = ['B', 'C', 'D', 'E', 'F', 'H', 'I', 'J', 'K', 'L'];
    for c in wrong {
        state.submit_letter(c);
    }
    assert_eq!(state.outcome(), Outcome::Lost);
    assert_eq!(state.incorrect_letters(), wrong.to_vec());
}

#[test]
fn lowercase_guess_is_uppercase_guess() {
    let word = Word::new("GATO").unwrap();
    let mut lower = controller_for(&word);
    let mut upper = controller_for(&word);
    assert_eq!(lower.handle_letter_input("g"), upper.handle_letter_input("G"));
}

#[test]
fn give_up_then_new_round_starts_clean() {
    let word = Word::new("GATO").unwrap();
    let mut game = controller_for(&word);
    game.handle_letter_input("x");

    let view = game.give_up();
    assert_eq!(view.phase, Phase::RoundOver);
    assert!(view.history.is_empty());

    let view = game.start_new_round();
    assert_eq!(view.phase, Phase::Playing);
    assert_eq!(view.outcome, Outcome::InProgress);
    assert!(view.guessed.is_empty());
    assert!(view.history.is_empty());
}
