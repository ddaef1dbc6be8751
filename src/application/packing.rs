//! # Message Packing
//!
//! Greedily concatenates cards into as few outgoing messages as possible
//! without exceeding a character budget.

/// Separator placed after every card before packing.
const CARD_SEPARATOR: &str = "\n\n";

/// Packs `cards` into messages of at most `budget` characters.
///
/// Cards are never split; a card longer than the budget on its own is sent
/// as a message of its own. Lengths are counted in characters.
pub fn pack_messages<I>(cards: I, budget: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut messages = Vec::new();
    let mut chunk = String::new();
    let mut used = 0;

    for card in cards {
        let block = format!("{card}{CARD_SEPARATOR}");
        let len = block.chars().count();
        if used + len > budget && !chunk.is_empty() {
            messages.push(chunk.trim().to_string());
            chunk.clear();
            used = 0;
        }
        chunk.push_str(&block);
        used += len;
    }
    if !chunk.is_empty() {
        messages.push(chunk.trim().to_string());
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(len: usize) -> String {
        "ж".repeat(len)
    }

    #[test]
    fn test_small_cards_share_a_message() {
        let messages = pack_messages(vec![card(10), card(10), card(10)], 100);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], format!("{}\n\n{}\n\n{}", card(10), card(10), card(10)));
    }

    #[test]
    fn test_budget_is_respected() {
        let cards: Vec<String> = (0..20).map(|_| card(300)).collect();
        let messages = pack_messages(cards, 1000);
        assert_eq!(messages.len(), 7);
        for message in &messages {
            assert!(message.chars().count() <= 1000);
            // every card arrives whole
            for part in message.split("\n\n") {
                assert_eq!(part.chars().count(), 300);
            }
        }
    }

    #[test]
    fn test_exact_fit_is_not_flushed() {
        // 48 + 2 separator chars = 50 per block
        let messages = pack_messages(vec![card(48), card(48)], 100);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_oversized_card_goes_alone() {
        let messages = pack_messages(vec![card(10), card(500), card(10)], 100);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], card(500));
    }

    #[test]
    fn test_no_cards_no_messages() {
        assert!(pack_messages(Vec::<String>::new(), 100).is_empty());
    }
}
