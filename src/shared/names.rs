use crate::game::constants::BOT_NICKNAMES;
use rand::Rng;

pub const MAX_PLAYER_NAME_LENGTH: usize = 20;
pub const DEFAULT_PLAYER_NAME: &str = "Player";

pub fn sanitize_player_name(name: &str, fallback: &str) -> String {
    let cleaned = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return fallback.to_string();
    }
    cleaned.chars().take(MAX_PLAYER_NAME_LENGTH).collect()
}

/// A bot name plus a number, e.g. `"Slinky 417"`.
pub fn random_bot_nickname<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base = BOT_NICKNAMES[rng.gen_range(0..BOT_NICKNAMES.len())];
    format!("{base} {}", rng.gen_range(0..1000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn collapses_whitespace_and_truncates() {
        assert_eq!(sanitize_player_name("  Big   Worm ", "Player"), "Big Worm");
        assert_eq!(sanitize_player_name("   ", "Player"), "Player");
        let long = "x".repeat(64);
        assert_eq!(sanitize_player_name(&long, "Player").len(), MAX_PLAYER_NAME_LENGTH);
    }

    #[test]
    fn bot_nicknames_use_known_names() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let name = random_bot_nickname(&mut rng);
            let (base, number) = name.rsplit_once(' ').unwrap();
            assert!(BOT_NICKNAMES.contains(&base));
            assert!(number.parse::<u32>().unwrap() < 1000);
        }
    }
}
