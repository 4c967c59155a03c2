use rand::Rng;

use crate::GameId;

const WORDS: &[&str] = &[
    "amber", "basalt", "cedar", "delta", "ember", "flint", "garnet", "harbor",
    "indigo", "juniper", "krypton", "lagoon", "meadow", "nimbus", "onyx", "prairie",
];

/// Generates a readable game id like `ember-lagoon-4217`.
pub fn generate_game_id() -> GameId {
    let mut rng = rand::rng();
    let first = WORDS[rng.random_range(0..WORDS.len())];
    let second = WORDS[rng.random_range(0..WORDS.len())];
    let suffix: u16 = rng.random_range(1000..10000);
    GameId::new(format!("{}-{}-{}", first, second, suffix))
}
