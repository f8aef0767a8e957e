
use super::Policy;
use crate::quoridor::prelude::*;

/// Running invocation counts keyed by a short label. Kept as an explicit
/// value that callers thread where they want it; nothing global, nothing
/// patched.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    counts: BTreeMap<String, u64>,
}

impl Tally {
    /// Adds one to a label's count.
    pub fn bump(&mut self, label: &str) -> () {
        *self.counts.entry(label.to_owned()).or_default() += 1;
    }

    /// Reads a label's count.
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Renders the counts, busiest label first, alphabetical among equals.
    pub fn report(&self) -> String {
        let mut entries: Vec<(&String, &u64)> = self.counts.iter().collect();
        entries.sort_by(|lhs, rhs| rhs.1.cmp(lhs.1).then_with(|| lhs.0.cmp(rhs.0)));

        let mut lines = vec!["action summary:".to_owned()];
        lines.extend(entries.iter().map(|(label, count)| format!("- {label}: {count}")));
        lines.join("\n")
    }
}

/// Middleware around a policy's choose() entry point: counts what the wrapped
/// policy decides without influencing it.
pub struct Tallied {
    inner: Box<dyn Policy>,
    tally: Tally,
}

impl Tallied {
    /// Wraps a policy.
    pub fn around(inner: Box<dyn Policy>) -> Tallied {
        Tallied { inner, tally: Tally::default() }
    }

    /// The counts gathered so far.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
}

impl Policy for Tallied {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn choose(&mut self, board: &Board) -> Action {
        let action = self.inner.choose(board);
        let kind = match action {
            Action::Move(_)  => "move",
            Action::Fence(_) => "fence"
        };
        self.tally.bump(&format!("{}.choose", self.inner.name()));
        self.tally.bump(&format!("{}.{}", self.inner.name(), kind));
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentConfig, WhichPolicy};

    #[test]
    fn counts_accumulate_per_label() {
        let mut tally = Tally::default();
        tally.bump("a");
        tally.bump("b");
        tally.bump("b");

        assert_eq!(tally.count("a"), 1);
        assert_eq!(tally.count("b"), 2);
        assert_eq!(tally.count("missing"), 0);
    }

    #[test]
    fn report_orders_busiest_first() {
        let mut tally = Tally::default();
        tally.bump("rare");
        for _ in 0..3 {
            tally.bump("common");
        }

        let report = tally.report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "action summary:");
        assert_eq!(lines[1], "- common: 3");
        assert_eq!(lines[2], "- rare: 1");
    }

    #[test]
    fn wrapped_policies_are_counted_but_unchanged() {
        let config = AgentConfig { seed: Some(42), selected: WhichPolicy::Runner, ..AgentConfig::default() };
        let mut bare = config.get_agent();
        let mut counted = Tallied::around(config.get_agent());

        let board = Board::new();
        for _ in 0..4 {
            assert_eq!(bare.choose(&board), counted.choose(&board));
        }
        assert_eq!(counted.tally().count("runner.choose"), 4);
    }
}
