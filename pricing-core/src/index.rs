use crate::data::Card;
use std::collections::HashMap;

/// Id to position lookup over a card list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardIndex {
    positions: HashMap<String, usize>,
}

impl CardIndex {
    /// Index `cards` by id. When ids repeat, the first card wins.
    #[must_use]
    pub fn build(cards: &[Card]) -> Self {
        let mut positions = HashMap::with_capacity(cards.len());
        for (pos, card) in cards.iter().enumerate() {
            positions.entry(card.id.clone()).or_insert(pos);
        }
        Self { positions }
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    #[must_use]
    pub fn get<'a>(&self, cards: &'a [Card], id: &str) -> Option<&'a Card> {
        self.position(id).and_then(|pos| cards.get(pos))
    }

    /// Cards for `ids` in list order; unknown ids are skipped.
    pub fn resolve<'a>(
        &'a self,
        cards: &'a [Card],
        ids: &'a [String],
    ) -> impl Iterator<Item = &'a Card> + 'a {
        ids.iter().filter_map(move |id| self.get(cards, id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
