/// Priority band of an exact-match word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Small, rank-ordered list of common words.
    Popular,
    /// Large general dictionary.
    General,
}

/// Words and prefix children registered for one digit sequence within one tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierEntry {
    pub(crate) words: Vec<String>,
    pub(crate) prefix_children: Vec<String>,
}

impl TierEntry {
    /// Exact-match words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Longer digit sequences registered under this one, in registration order.
    pub fn prefix_children(&self) -> &[String] {
        &self.prefix_children
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.prefix_children.is_empty()
    }
}

/// Popular and general data for one digit sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    pub popular: TierEntry,
    pub general: TierEntry,
}

impl IndexEntry {
    pub fn tier(&self, tier: Tier) -> &TierEntry {
        match tier {
            Tier::Popular => &self.popular,
            Tier::General => &self.general,
        }
    }
}
